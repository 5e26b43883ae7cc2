use strum::IntoEnumIterator;

/// Joins every variant's string form with `sep`, in declaration order.
pub fn valid_choices<T>(sep: &str) -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Comma-separated variant list for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    valid_choices::<T>(", ")
}
