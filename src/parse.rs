use crate::Error;

/// Parses a comma-separated list of numbers into an ordered vector.
///
/// Tokens are taken verbatim: no whitespace trimming, no locale handling.
/// The first token that fails to parse aborts the whole parse and is
/// reported back untouched, so `1,abc,3` fails with `abc` and a trailing
/// comma fails with the empty token. A token spelling NaN is treated as a
/// failed parse; infinities are accepted.
pub fn parse_nums(raw: &str) -> Result<Vec<f64>, Error> {
    raw.split(',')
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|num| !num.is_nan())
                .ok_or_else(|| Error::NotANumber(token.to_string()))
        })
        .collect()
}
