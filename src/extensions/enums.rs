use strum::IntoEnumIterator;

/// Every variant's string form joined with ", ", in declaration order. Feeds
/// the "should be one of" error messages.
pub fn valid_csv<E>() -> String
where
    E: IntoEnumIterator + AsRef<str>,
{
    let names: Vec<String> = E::iter().map(|variant| variant.as_ref().to_string()).collect();
    names.join(", ")
}
