use std::borrow::Cow;

use super::toast_state::ToastKind;

/// Values accepted by the controller's field setters
///
/// Anything displayable is stored as its text; `None` clears the field.
pub trait FieldValue {
    fn into_field_value(self) -> Option<String>;
}

macro_rules! display_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn into_field_value(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_field_value!(
    &str, String, &String, Cow<'_, str>, char, bool, ToastKind,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: FieldValue> FieldValue for Option<T> {
    fn into_field_value(self) -> Option<String> {
        self.and_then(FieldValue::into_field_value)
    }
}
