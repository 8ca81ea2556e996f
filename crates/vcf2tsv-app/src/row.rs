//! The flat output record.

/// Column headers, in output order.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Full name",
    "Cell phone",
    "Work phone",
    "Home phone",
    "Email",
    "Note",
];

/// One output row per vCard. Absent fields are written as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub cell_phone: Option<String>,
    pub work_phone: Option<String>,
    pub home_phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
}

impl OutputRow {
    /// Returns the cells in [`COLUMNS`] order.
    #[must_use]
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.full_name,
            &self.cell_phone,
            &self.work_phone,
            &self.home_phone,
            &self.email,
            &self.note,
        ]
        .map(|field| field.as_deref().unwrap_or_default())
    }
}
