use serde::{Deserialize, Serialize};

/// Required CSV columns, in output order. Input column order is irrelevant;
/// columns are matched by header name.
pub const LEAD_COLUMNS: [&str; 8] = [
    "tel",
    "email",
    "name",
    "firstname",
    "idade",
    "sexo",
    "onde",
    "date",
];

/// One lead, as loaded from a CSV row.
///
/// Every field is optional: an empty or missing cell is `None`, and the
/// cleaning pipeline replaces each value with its normalized form or `None`.
/// After cleaning, a retained record always has `tel = Some(..)` holding an
/// E.164 formatted number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub tel: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub idade: Option<String>,
    pub sexo: Option<String>,
    pub onde: Option<String>,
    pub date: Option<String>,
}

impl LeadRecord {
    /// Field values in `LEAD_COLUMNS` order, for CSV output.
    pub fn values(&self) -> [Option<&str>; 8] {
        [
            self.tel.as_deref(),
            self.email.as_deref(),
            self.name.as_deref(),
            self.firstname.as_deref(),
            self.idade.as_deref(),
            self.sexo.as_deref(),
            self.onde.as_deref(),
            self.date.as_deref(),
        ]
    }
}
