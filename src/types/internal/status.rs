use std::str::FromStr;

use poem_openapi::Enum;

use crate::errors::InternalError;

/// Implements the column-value mapping shared by every stored status enum
macro_rules! column_enum {
    ($name:ident, $value_type:literal, { $($variant:ident => $value:literal),+ $(,)? }) => {
        impl $name {
            /// Value stored in the status column
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl FromStr for $name {
            type Err = InternalError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(InternalError::parse($value_type, format!("unknown value '{}'", other))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Enrollment status of a cadet
///
/// Transitions are unconstrained: staff may move a cadet between any two states.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[oai(rename_all = "snake_case")]
pub enum CadetStatus {
    #[default]
    Active,
    Graduated,
    Dismissed,
    Withdrawn,
}

column_enum!(CadetStatus, "cadet_status", {
    Active => "active",
    Graduated => "graduated",
    Dismissed => "dismissed",
    Withdrawn => "withdrawn",
});

/// Review status of an intake application
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[oai(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    UnderReview,
    Approved,
    Denied,
    Waitlisted,
}

column_enum!(ApplicationStatus, "application_status", {
    Pending => "pending",
    UnderReview => "under_review",
    Approved => "approved",
    Denied => "denied",
    Waitlisted => "waitlisted",
});

/// Status of a mentor assignment
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[oai(rename_all = "snake_case")]
pub enum MentorshipStatus {
    #[default]
    Active,
    Completed,
    Inactive,
}

column_enum!(MentorshipStatus, "mentorship_status", {
    Active => "active",
    Completed => "completed",
    Inactive => "inactive",
});

/// Category of an activity feed entry
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub enum ActivityType {
    CadetActivity,
    SystemEvent,
    TaskCompleted,
}

column_enum!(ActivityType, "activity_type", {
    CadetActivity => "cadet_activity",
    SystemEvent => "system_event",
    TaskCompleted => "task_completed",
});
