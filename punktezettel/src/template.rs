//! The example roster offered for download next to the upload form. Shipped
//! as a fixed asset, not generated.

/// Static CSV matching the expected three-column roster schema.
pub const ROSTER_TEMPLATE_CSV: &str = include_str!("../assets/studierendenliste_vorlage.csv");

/// Suggested filename for the download handler.
pub const ROSTER_TEMPLATE_FILENAME: &str = "Studierendenliste_Vorlage.csv";

#[cfg(test)]
mod tests {
    use super::ROSTER_TEMPLATE_CSV;
    use crate::import::rows_from_csv;
    use crate::roster::Roster;

    #[test]
    fn template_passes_its_own_validation() {
        let rows = rows_from_csv(ROSTER_TEMPLATE_CSV.as_bytes()).unwrap();
        let roster = Roster::validate(&rows).unwrap();
        assert_eq!(roster.len(), 12);
        assert_eq!(roster.students()[0].matriculation().as_str(), "100000");
    }
}
