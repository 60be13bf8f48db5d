// BEGIN SNIPPET option
pub trait BoolExt {
    fn then_some_value<T>(self, value: T) -> Option<T>;
}
// END SNIPPET
