#![forbid(unsafe_code)]

pub mod ids {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct MissionId(String);

    impl MissionId {
        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }

        pub fn try_new(value: impl Into<String>) -> Result<Self, MissionIdError> {
            let value = value.into();
            validate_mission_id(&value)?;
            Ok(Self(value))
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum MissionIdError {
        Empty,
        TooLong,
        InvalidFirstChar,
        InvalidChar { ch: char, index: usize },
    }

    fn validate_mission_id(value: &str) -> Result<(), MissionIdError> {
        if value.is_empty() {
            return Err(MissionIdError::Empty);
        }
        if value.len() > 64 {
            return Err(MissionIdError::TooLong);
        }
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return Err(MissionIdError::Empty);
        };
        if !first.is_ascii_alphanumeric() {
            return Err(MissionIdError::InvalidFirstChar);
        }
        for (index, ch) in value.chars().enumerate() {
            if index == 0 {
                continue;
            }
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
                continue;
            }
            return Err(MissionIdError::InvalidChar { ch, index });
        }
        Ok(())
    }
}

pub mod model {
    use crate::ids::{MissionId, MissionIdError};

    /// Canonical mission statuses. The store writes caller-supplied status
    /// strings verbatim, so these are the expected values, not an enforced set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum MissionStatus {
        Pending,
        Completed,
    }

    impl MissionStatus {
        pub fn as_str(self) -> &'static str {
            match self {
                MissionStatus::Pending => "Pending",
                MissionStatus::Completed => "Completed",
            }
        }

        pub fn from_str(value: &str) -> Option<Self> {
            match value.trim() {
                "Pending" => Some(MissionStatus::Pending),
                "Completed" => Some(MissionStatus::Completed),
                _ => None,
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Mission {
        id: MissionId,
        title: String,
        status: String,
        is_boss: bool,
        player_name: Option<String>,
        created_at_ms: i64,
    }

    impl Mission {
        pub fn try_new(
            id: impl Into<String>,
            title: String,
            status: String,
            is_boss: bool,
            player_name: Option<String>,
            created_at_ms: i64,
        ) -> Result<Self, MissionIdError> {
            let id = MissionId::try_new(id)?;
            Ok(Self {
                id,
                title,
                status,
                is_boss,
                player_name,
                created_at_ms,
            })
        }

        pub fn id(&self) -> &str {
            self.id.as_str()
        }

        pub fn title(&self) -> &str {
            &self.title
        }

        pub fn status(&self) -> &str {
            &self.status
        }

        pub fn is_boss(&self) -> bool {
            self.is_boss
        }

        pub fn player_name(&self) -> Option<&str> {
            self.player_name.as_deref()
        }

        pub fn created_at_ms(&self) -> i64 {
            self.created_at_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ids::{MissionId, MissionIdError};
    use super::model::{Mission, MissionStatus};

    #[test]
    fn mission_id_accepts_generated_shape() {
        let id = MissionId::try_new("MSN-007").expect("valid id");
        assert_eq!(id.as_str(), "MSN-007");
    }

    #[test]
    fn mission_id_rejects_bad_shapes() {
        assert_eq!(MissionId::try_new(""), Err(MissionIdError::Empty));
        assert_eq!(
            MissionId::try_new("-leading-dash"),
            Err(MissionIdError::InvalidFirstChar)
        );
        assert_eq!(
            MissionId::try_new("MSN 001"),
            Err(MissionIdError::InvalidChar { ch: ' ', index: 3 })
        );
        assert_eq!(
            MissionId::try_new("a".repeat(65)),
            Err(MissionIdError::TooLong)
        );
    }

    #[test]
    fn mission_status_round_trips_canonical_values() {
        assert_eq!(
            MissionStatus::from_str("Pending"),
            Some(MissionStatus::Pending)
        );
        assert_eq!(
            MissionStatus::from_str("Completed"),
            Some(MissionStatus::Completed)
        );
        assert_eq!(MissionStatus::from_str("Paused"), None);
        assert_eq!(MissionStatus::Pending.as_str(), "Pending");
    }

    #[test]
    fn mission_keeps_unvalidated_status_text() {
        let mission = Mission::try_new(
            "MSN-001",
            "Patrol".to_string(),
            "Paused".to_string(),
            false,
            None,
            0,
        )
        .expect("mission");
        assert_eq!(mission.status(), "Paused");
    }
}
