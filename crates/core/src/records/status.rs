//! Status values for the entity kinds that have a lifecycle.
//!
//! Statuses are stored as free text. Each enum names the values Carebook itself writes and
//! keeps anything else verbatim in `Other`, so unknown statuses survive a load/save cycle.
//! Matching is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! text_status {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Any other stored value, kept as written.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(text) => text,
                }
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                match text.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(text),
                }
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self::from(text.to_string())
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                match status {
                    $name::Other(text) => text,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_status! {
    /// Appointment lifecycle. `Cancelled` is terminal but not guarded.
    AppointmentStatus {
        Scheduled => "Scheduled",
        Cancelled => "Cancelled",
        Completed => "Completed",
    }
}

text_status! {
    /// Prescription lifecycle.
    PrescriptionStatus {
        Issued => "Issued",
        Collected => "Collected",
    }
}

text_status! {
    /// Referral lifecycle.
    ReferralStatus {
        Pending => "Pending",
        Sent => "Sent",
        Accepted => "Accepted",
        Completed => "Completed",
    }
}
