use crate::models::InstanceSpec;

/// Human readable line for each instance spec, in catalog order.
///
/// The iterator is lazy and can be cloned to walk the catalog again.
pub fn get_formatted_instance_list(specs: &[InstanceSpec]) -> impl Iterator<Item = String> + Clone + '_ {
    specs.iter().map(InstanceSpec::to_string)
}

/// Tells whether `size` is one of the catalog sizes. Comparison is exact and case sensitive.
pub fn instance_in_list(specs: &[InstanceSpec], size: &str) -> bool {
    specs.iter().any(|spec| spec.size == size)
}
