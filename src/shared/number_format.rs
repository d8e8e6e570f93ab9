/// Render a float the way JavaScript prints numbers: no trailing ".0" on
/// whole values ("8GB", not "8.0GB"), shortest form otherwise.
pub fn compact_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_values_lose_the_fraction() {
        assert_eq!(compact_number(8.0), "8");
        assert_eq!(compact_number(0.0), "0");
        assert_eq!(compact_number(-16.0), "-16");
    }

    #[test]
    fn test_fractional_values_keep_it() {
        assert_eq!(compact_number(1.37), "1.37");
        assert_eq!(compact_number(13.3), "13.3");
    }
}
