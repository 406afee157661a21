/// A fieldless enum.
///
/// Variant names are the persisted upper-case names, e.g. `NORTH_EAST` for `NorthEast`.
pub trait EnumValue {
    fn variant_name(&self) -> &'static str;

    /// Switches to the variant called `name`.
    ///
    /// `name` must already be upper-case. Returns `false` if no variant matches.
    fn set_variant_name(&mut self, name: &str) -> bool;

    /// All variant names in declaration order.
    fn variant_names(&self) -> &'static [&'static str];
}
