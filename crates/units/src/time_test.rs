mod tests {
    use approx::assert_relative_eq;

    use crate::time::{SECONDS_PER_YEAR, Time};

    #[test]
    fn test_time_conversions() {
        let one_year = Time::from_years(1.0);
        assert_relative_eq!(one_year.to_seconds(), SECONDS_PER_YEAR);
        assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_years(), 1.0);

        // Main-sequence fits use Myr, spin-down laws use Gyr
        let solar_age = Time::from_gyr(4.567);
        assert_relative_eq!(solar_age.to_myr(), 4567.0, max_relative = 1e-12);
        assert_relative_eq!(Time::from_myr(4567.0).to_gyr(), 4.567, max_relative = 1e-12);
    }

    #[test]
    fn test_time_ratio_is_dimensionless() {
        let age = Time::from_myr(500.0);
        let lifetime = Time::from_gyr(10.0);
        assert_relative_eq!(age / lifetime, 0.05);
        assert_relative_eq!((age + age).to_myr(), 1000.0);
        assert_relative_eq!((lifetime - age).to_myr(), 9500.0);
    }
}
