use crate::stores::profiles::{ExtendedInfo, Profile};

/// One line of the extended info block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoField {
    BloodType,
    Birthplace,
    Height,
    Measurements,
}

impl InfoField {
    pub fn label(&self) -> &'static str {
        match self {
            InfoField::BloodType => "Blood type",
            InfoField::Birthplace => "Hometown",
            InfoField::Height => "Height",
            InfoField::Measurements => "Measurements",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoLine {
    pub field: InfoField,
    pub value: String,
}

/// Lines to show for an extended info record.
///
/// Blood type and birthplace are left out when empty; height and
/// measurements are always listed.
pub fn info_lines(info: &ExtendedInfo) -> Vec<InfoLine> {
    let mut lines = Vec::with_capacity(4);

    if !info.blood.is_empty() {
        lines.push(InfoLine { field: InfoField::BloodType, value: info.blood.clone() });
    }
    if !info.birth_place.is_empty() {
        lines.push(InfoLine { field: InfoField::Birthplace, value: info.birth_place.clone() });
    }
    lines.push(InfoLine { field: InfoField::Height, value: info.height.clone() });
    lines.push(InfoLine { field: InfoField::Measurements, value: info.three_sizes.clone() });

    lines
}

/// Heading under the avatar, e.g. "Linh (24 years old)"
pub fn name_and_age(profile: &Profile) -> String {
    format!("{} ({} years old)", profile.name, profile.age)
}

pub fn format_match_percent(percent: Option<u8>) -> String {
    match percent {
        Some(p) => format!("{}%", p),
        None => "--%".to_string(),
    }
}
