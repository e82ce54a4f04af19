use chrono::NaiveDate;
use garde::Validate;
use shared::error::FieldViolation;

use super::DeskBookingRequest;

pub struct ValidationContext {
    pub today: NaiveDate,
}

pub(crate) fn date_in_future(value: &NaiveDate, context: &ValidationContext) -> garde::Result {
    if *value > context.today {
        Ok(())
    } else {
        Err(garde::Error::new("Date must be in the future"))
    }
}

/// Checks a request against the field rules before it reaches the processor.
/// `today` is the caller's calendar date; only dates strictly after it pass.
pub fn validate_request(
    request: &DeskBookingRequest,
    today: NaiveDate,
) -> Result<(), Vec<FieldViolation>> {
    request
        .validate(&ValidationContext { today })
        .map_err(|report| FieldViolation::from_report(&report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 13).unwrap()
    }

    fn request(date: NaiveDate) -> DeskBookingRequest {
        DeskBookingRequest {
            first_name: "Ataev".into(),
            last_name: "Daler".into(),
            email: "test@gmail.com".into(),
            date,
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn accepts_valid_request() {
        let tomorrow = NaiveDate::from_ymd_opt(2020, 1, 14).unwrap();
        assert_eq!(validate_request(&request(tomorrow), today()), Ok(()));
    }

    #[test]
    fn rejects_today_and_past_dates() {
        for day in [12, 13] {
            let date = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
            let violations = validate_request(&request(date), today()).unwrap_err();
            assert_eq!(
                violations,
                vec![FieldViolation::new("date", "Date must be in the future")]
            );
        }
    }

    #[test]
    fn rejects_overlong_names() {
        let mut req = request(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        req.first_name = "a".repeat(51);
        req.last_name = "b".repeat(51);
        let violations = validate_request(&req, today()).unwrap_err();
        assert_eq!(fields(&violations), vec!["first_name", "last_name"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut req = request(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        req.first_name = "é".repeat(50);
        assert_eq!(validate_request(&req, today()), Ok(()));
    }

    #[test]
    fn accepts_empty_names() {
        let mut req = request(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        req.first_name = String::new();
        req.last_name = String::new();
        assert_eq!(validate_request(&req, today()), Ok(()));
    }

    #[test]
    fn orders_violations_by_field() {
        let mut req = request(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        req.email = "not-an-email".into();
        req.last_name = "b".repeat(51);
        let violations = validate_request(&req, today()).unwrap_err();
        assert_eq!(fields(&violations), vec!["date", "email", "last_name"]);
    }

    #[test]
    fn rejects_malformed_and_overlong_email() {
        let mut req = request(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        req.email = "not-an-email".into();
        let violations = validate_request(&req, today()).unwrap_err();
        assert_eq!(fields(&violations), vec!["email"]);

        // 101 chars, otherwise well formed.
        req.email = format!("{}@{}.com", "a".repeat(60), "b".repeat(36));
        let violations = validate_request(&req, today()).unwrap_err();
        assert_eq!(fields(&violations), vec!["email"]);

        req.email = format!("{}@{}.com", "a".repeat(60), "b".repeat(35));
        assert_eq!(validate_request(&req, today()), Ok(()));
    }
}
