mod instance_specs;
mod wait;
