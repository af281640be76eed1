use serde::{Deserialize, Serialize};

/// Extra attributes a member may choose to fill in.
/// Any field may be an empty string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedInfo {
    #[serde(default)]
    pub blood: String,
    #[serde(default)]
    pub birth_place: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub three_sizes: String,
}

/// Logical identity of a profile
///
/// Two `Profile` values with the same key are the same person, even when one
/// was rebuilt with a different bio or avatar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProfileKey(String);

impl ProfileKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A member profile as shown on the profile screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub age: u32,
    #[serde(default)]
    pub bio: String,
    /// Match percentage, only known for other members
    #[serde(default)]
    pub percent: Option<u8>,
    #[serde(default)]
    pub full_info: Option<ExtendedInfo>,
}

impl Profile {
    pub fn key(&self) -> ProfileKey {
        ProfileKey(self.name.trim().to_string())
    }

    /// Get the avatar URL, with Dicebear fallback
    pub fn get_avatar_url(&self) -> String {
        let avatar = self.avatar.trim();
        if avatar.starts_with("http://") || avatar.starts_with("https://") {
            return avatar.to_string();
        }
        format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            urlencoding::encode(self.name.trim())
        )
    }

    /// Get initials for avatar placeholder
    pub fn get_initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        match words.as_slice() {
            [] => "?".to_string(),
            [only] => only.chars().next().unwrap_or('?').to_uppercase().to_string(),
            [first, .., last] => {
                let a = first.chars().next().unwrap_or('?');
                let b = last.chars().next().unwrap_or('?');
                format!("{}{}", a, b).to_uppercase()
            }
        }
    }

    /// Reject profiles that cannot be displayed.
    ///
    /// The profile screen assumes its input passed this check.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Profile has no name".to_string());
        }
        if self.age == 0 || self.age > 130 {
            return Err(format!("Profile {} has an implausible age: {}", self.name, self.age));
        }
        if let Some(percent) = self.percent {
            if percent > 100 {
                return Err(format!(
                    "Profile {} has a match percentage above 100: {}",
                    self.name, percent
                ));
            }
        }
        Ok(())
    }
}
