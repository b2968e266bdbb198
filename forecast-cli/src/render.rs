use colored::Colorize;
use forecast_core::WeatherReport;

/// Human-readable summary of a report, temperatures to two decimals.
pub fn render(report: &WeatherReport) -> String {
    format!(
        "\n{} weather in {}, {}:\n{}: {:.2}°\n{}: {:.2}°\n{}: {}\n\n",
        "Current".cyan(),
        report.location_name,
        report.country_code,
        "Temperature".yellow(),
        report.temperature,
        "Feels Like".yellow(),
        report.feels_like,
        "Weather".green(),
        report.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_fields_with_two_decimals() {
        colored::control::set_override(false);

        let report = WeatherReport {
            location_name: "Berlin".into(),
            country_code: "DE".into(),
            temperature: 68.5,
            feels_like: 66.2,
            description: "clear sky".into(),
        };

        assert_eq!(
            render(&report),
            "\nCurrent weather in Berlin, DE:\nTemperature: 68.50°\nFeels Like: 66.20°\nWeather: clear sky\n\n"
        );
    }

    #[test]
    fn rounds_long_fractions() {
        colored::control::set_override(false);

        let report = WeatherReport {
            location_name: "Oslo".into(),
            country_code: "NO".into(),
            temperature: -3.14159,
            feels_like: -7.005,
            description: "light snow".into(),
        };

        let text = render(&report);
        assert!(text.contains("Temperature: -3.14°"));
        assert!(text.contains("Feels Like: -7."));
    }
}
