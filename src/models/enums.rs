use serde::{Deserialize, Serialize};

/// Macro to generate a closed categorical field: a fixed set of permitted
/// string values with exact-match parsing and ordered enumeration.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Permitted values in declaration order. The order drives
            /// dropdown rendering in the spreadsheet export.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Exact-match membership test. Text and case must match a
            /// permitted value; anything else is `None`, not an error.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

categorical!(Stream {
    Governance => "Governance",
    Marketing => "Marketing and Communications",
    Onboarding => "Onboarding & Training",
    Product => "Product Development & Technology",
});

categorical!(Substream {
    Governance => "Governance",
    Communications => "Internal & External Communications",
    Training => "Training Material Development",
    Module => "Module Enhancements & Testing",
});

categorical!(Initiative {
    Ctu => "CTU Approval",
    Other => "Other",
    Gtm => "Go-to-Market",
    Future => "Future State Process & Training",
    Mvp1 => "MVP 1",
    Mvp2 => "MVP 2",
    Mvp3 => "MVP 3",
    Testing => "Testing",
    Endeavor => "Endeavor",
    IpHub => "IP Hub",
});

categorical!(
    /// Serialized under the JSON key `Type` on project items.
    ItemType {
        Technical => "Technical",
        Functional => "Functional",
    }
);

categorical!(Stage {
    Backlog => "Backlog",
    Research => "Research",
    InProgress => "In-Progress",
    Qa => "Q&A",
    Done => "Done",
});
