use serde::{Deserialize, Deserializer};

/// A single driver account as the backend reports it.
///
/// Field names follow the backend's JSON keys (`solde`, `is_online`,
/// `bloque_par_admin`); booleans are transported as 0/1 integers.
/// Deserialization is strict: a missing key or malformed value fails
/// the whole listing parse.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub phone: String,
    #[serde(rename = "solde")]
    pub balance: i64,
    pub status: String,
    #[serde(rename = "is_online", deserialize_with = "bool_from_int")]
    pub online: bool,
    pub docs_status: String,
    #[serde(rename = "bloque_par_admin", deserialize_with = "bool_from_int")]
    pub blocked: bool,
}

/// Human-readable account state derived from a driver's flags.
///
/// Blocked overrides everything; document problems come before the
/// active/inactive split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLabel {
    Blocked,
    DocsRejected,
    DocsPending,
    Active,
    Inactive,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Blocked => "blocked",
            StatusLabel::DocsRejected => "documents rejected",
            StatusLabel::DocsPending => "documents pending",
            StatusLabel::Active => "active",
            StatusLabel::Inactive => "inactive",
        }
    }
}

impl Driver {
    /// Pure derivation of the display label from (blocked, docs_status, status).
    pub fn status_label(&self) -> StatusLabel {
        if self.blocked {
            StatusLabel::Blocked
        } else if self.docs_status == "rejected" {
            StatusLabel::DocsRejected
        } else if self.docs_pending() {
            StatusLabel::DocsPending
        } else if self.docs_status == "approved" && self.status == "active" {
            StatusLabel::Active
        } else {
            StatusLabel::Inactive
        }
    }

    /// Whether the driver's documents are still awaiting review.
    ///
    /// The backend uses both "pending" and "send" for submitted-but-unreviewed
    /// documents; approval is only offered in these states.
    pub fn docs_pending(&self) -> bool {
        self.docs_status == "pending" || self.docs_status == "send"
    }
}

/// Parse the listing endpoint's body as a JSON array of drivers.
///
/// All-or-nothing: one malformed element rejects the whole response.
pub fn parse_drivers(body: &str) -> Result<Vec<Driver>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Deserialize the backend's 0/1 integers into bool, rejecting other values.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Unsigned(other as u64),
            &"0 or 1",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(blocked: bool, docs_status: &str, status: &str) -> Driver {
        Driver {
            id: 1,
            phone: String::from("770000000"),
            balance: 0,
            status: status.to_string(),
            online: false,
            docs_status: docs_status.to_string(),
            blocked,
        }
    }

    #[test]
    fn test_parse_listing_maps_fields() {
        let body = r#"[
            {"id":7,"phone":"555","solde":100,"status":"active","is_online":1,"docs_status":"approved","bloque_par_admin":0},
            {"id":8,"phone":"556","solde":-50,"status":"inactive","is_online":0,"docs_status":"pending","bloque_par_admin":1}
        ]"#;
        let drivers = parse_drivers(body).unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].id, 7);
        assert_eq!(drivers[0].balance, 100);
        assert!(drivers[0].online);
        assert!(!drivers[0].blocked);
        assert_eq!(drivers[0].status_label(), StatusLabel::Active);
        assert_eq!(drivers[1].balance, -50);
        assert!(drivers[1].blocked);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let body = r#"[{"id":7,"phone":"555","solde":100,"status":"active","is_online":1,"docs_status":"approved"}]"#;
        assert!(parse_drivers(body).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_bool() {
        let body = r#"[{"id":7,"phone":"555","solde":100,"status":"active","is_online":2,"docs_status":"approved","bloque_par_admin":0}]"#;
        assert!(parse_drivers(body).is_err());
    }

    #[test]
    fn test_blocked_overrides_approved() {
        assert_eq!(
            driver(true, "approved", "active").status_label(),
            StatusLabel::Blocked
        );
    }

    #[test]
    fn test_label_table() {
        assert_eq!(
            driver(false, "rejected", "active").status_label(),
            StatusLabel::DocsRejected
        );
        assert_eq!(
            driver(false, "pending", "active").status_label(),
            StatusLabel::DocsPending
        );
        assert_eq!(
            driver(false, "send", "active").status_label(),
            StatusLabel::DocsPending
        );
        assert_eq!(
            driver(false, "approved", "active").status_label(),
            StatusLabel::Active
        );
        assert_eq!(
            driver(false, "approved", "suspended").status_label(),
            StatusLabel::Inactive
        );
    }
}
