//! Static documentation content.
//!
//! The guide presents a fixed, ordered catalog of topic pages. The catalog is
//! compile-time data: icons and section text are presentation metadata, while
//! titles, subtitles, search terms, and section bodies feed the search filter.

/// A single section of prose on a topic page.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    pub heading: &'static str,
    pub body: &'static str,
    pub emphasized: bool,
}

/// One annotated step on the quickstart walkthrough.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickstartStep {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

/// A page of the documentation catalog.
///
/// `id` is unique across the catalog and catalog order is the canonical
/// display order absent filtering. `search_terms` entries are pre-lowercased.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPage {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub search_terms: &'static [&'static str],
    pub sections: &'static [ContentSection],
    pub quickstart: &'static [QuickstartStep],
    pub is_diagram_page: bool,
}

/// Mermaid definition for the workflow page, handed to the external diagram
/// renderer when one is available.
///
pub const DIAGRAM_DEFINITION: &str = "\
graph TD
    A[User Access Form] --> B{All Fields Filled?}
    B -->|No| C[Submit Button Disabled]
    C --> D[User Fills Required Fields]
    D --> B

    B -->|Yes| E[Submit Button Enabled]
    E --> F[User Clicks Submit Email]

    F --> G{Validate Vendor Number}
    G -->|Invalid| H[Show Error: Whole Numbers Only]
    H --> D

    G -->|Valid| I[Compose Email with Form Data]
    I --> J[Send via Outlook to Specified Inbox]

    J --> K{Email Dispatch Status}
    K -->|Failed| L[Show Error Message]
    L --> M[Log Error]

    K -->|Success| N[Display Success Message]
    N --> O[Email Received in Inbox]

    O --> P[Wait for Scheduled Interval]
    P --> Q[Python Script Triggered]
    Q --> R[Read Email from Inbox]
    R --> S[Parse Vendor Data]
    S --> T[Validate Data Format]

    T --> U{Data Valid?}
    U -->|No| V[Log Validation Error]
    V --> W[Send Error Notification]

    U -->|Yes| X[Connect to Esker System]
    X --> Y[Update Vendor Information]
    Y --> Z{Update Successful?}

    Z -->|No| AA[Retry Logic]
    AA --> AB{Retry Count < Max?}
    AB -->|Yes| X
    AB -->|No| AC[Log Failure & Alert Admin]

    Z -->|Yes| AD[Log Success]
    AD --> AE[Archive Processed Email]
    AE --> AF[Send Confirmation]
    AF --> P
";

const OVERVIEW_SECTIONS: &[ContentSection] = &[
    ContentSection {
        heading: "Process Overview",
        body: "The Esker vendor update process provides an automated workflow for \
               collecting vendor information through a web form and synchronizing \
               it with the Esker system via scheduled scripts.",
        emphasized: false,
    },
    ContentSection {
        heading: "Key Components",
        body: "Web form for data input, Outlook email integration, a scheduled \
               automation script, and Esker system synchronization.",
        emphasized: false,
    },
    ContentSection {
        heading: "Automation Benefits",
        body: "Reduces manual data entry, ensures data consistency, provides \
               audit trail through email, and enables scheduled batch processing.",
        emphasized: false,
    },
];

const FORM_SECTIONS: &[ContentSection] = &[
    ContentSection {
        heading: "Required Fields",
        body: "All input fields must be completed before submission. The system \
               includes: Company Code, Vendor Number (whole numbers only), and \
               Vendor Name fields.",
        emphasized: true,
    },
    ContentSection {
        heading: "Vendor Number Validation",
        body: "The vendor number field accepts whole numbers only. Any decimal or \
               non-numeric input will be rejected to maintain data integrity.",
        emphasized: true,
    },
    ContentSection {
        heading: "Submit Button Behavior",
        body: "The Submit Email button remains disabled until all required fields \
               are properly filled. This prevents incomplete data submission.",
        emphasized: false,
    },
];

const EMAIL_SECTIONS: &[ContentSection] = &[
    ContentSection {
        heading: "Email Dispatch",
        body: "Upon submission, the form generates and sends an Outlook email to \
               a pre-configured inbox. This email contains all vendor update \
               information in a structured format.",
        emphasized: false,
    },
    ContentSection {
        heading: "Success Confirmation",
        body: "A success message is displayed immediately after the email is \
               dispatched successfully, providing user feedback and confirmation.",
        emphasized: true,
    },
    ContentSection {
        heading: "Email Storage",
        body: "Submitted emails are stored in the specified inbox, creating an \
               audit trail and serving as the data source for the Python \
               automation script.",
        emphasized: false,
    },
];

const AUTOMATION_SECTIONS: &[ContentSection] = &[
    ContentSection {
        heading: "Scheduled Execution",
        body: "A Python script runs at predetermined intervals (e.g., hourly, \
               daily) to process pending vendor updates automatically without \
               manual intervention.",
        emphasized: true,
    },
    ContentSection {
        heading: "Email Processing",
        body: "The script reads emails from the designated inbox, parses vendor \
               information, validates data format, and prepares it for Esker \
               system updates.",
        emphasized: false,
    },
    ContentSection {
        heading: "Esker Integration",
        body: "Validated vendor data is automatically pushed to the Esker system, \
               updating vendor records and maintaining synchronization across \
               platforms.",
        emphasized: true,
    },
];

const USER_GUIDE_SECTIONS: &[ContentSection] = &[
    ContentSection {
        heading: "Launch the vendor app",
        body: "Open Power Apps and choose the vendor canvas application from My \
               apps to begin the Esker update process.",
        emphasized: true,
    },
    ContentSection {
        heading: "Use preview mode to run the app",
        body: "Select the play control in the upper-right corner to launch the \
               interactive preview so you can enter vendor information.",
        emphasized: false,
    },
    ContentSection {
        heading: "Complete required fields then send the email",
        body: "Populate every required field. The vendor number accepts numeric \
               values only. When validation passes, select Send Email to dispatch \
               the vendor update.",
        emphasized: true,
    },
];

const QUICKSTART_STEPS: &[QuickstartStep] = &[
    QuickstartStep {
        image: "user_guide_1.png",
        title: "Open the vendor canvas app",
        description: "In Power Apps, locate the vendor application under My apps \
                      so you can launch the Esker vendor workflow.",
        note: "click on vendor app",
    },
    QuickstartStep {
        image: "user_guide_2.png",
        title: "Start the app preview",
        description: "Select the Play control in the top-right corner to enter \
                      the interactive app preview experience.",
        note: "click Play button",
    },
    QuickstartStep {
        image: "user_guide_3.png",
        title: "Complete the form and send the email",
        description: "Fill in every required field. The vendor number accepts \
                      numeric values only. When all fields are complete, choose \
                      Send Email to dispatch the update.",
        note: "fill in all fields (required), vendor number only accepts \
               numeric, click Send Email",
    },
];

/// Return the full documentation catalog in display order.
///
pub fn catalog() -> Vec<TopicPage> {
    vec![
        TopicPage {
            id: "overview",
            title: "Esker Vendor Update Process",
            subtitle: "Complete workflow automation guide",
            icon: "◈",
            search_terms: &[
                "overview",
                "process",
                "workflow",
                "automation",
                "guide",
                "introduction",
            ],
            sections: OVERVIEW_SECTIONS,
            quickstart: &[],
            is_diagram_page: false,
        },
        TopicPage {
            id: "form-requirements",
            title: "Form Input Requirements",
            subtitle: "Essential field validations and rules",
            icon: "▲",
            search_terms: &[
                "form",
                "input",
                "requirements",
                "validation",
                "fields",
                "required",
                "vendor number",
            ],
            sections: FORM_SECTIONS,
            quickstart: &[],
            is_diagram_page: false,
        },
        TopicPage {
            id: "email-process",
            title: "Email Submission Process",
            subtitle: "How data is transmitted via Outlook",
            icon: "✉",
            search_terms: &["email", "outlook", "submission", "dispatch", "send", "message"],
            sections: EMAIL_SECTIONS,
            quickstart: &[],
            is_diagram_page: false,
        },
        TopicPage {
            id: "automation",
            title: "Python Script Automation",
            subtitle: "Scheduled data synchronization to Esker",
            icon: "↻",
            search_terms: &[
                "python",
                "script",
                "automation",
                "schedule",
                "sync",
                "synchronization",
                "batch",
            ],
            sections: AUTOMATION_SECTIONS,
            quickstart: &[],
            is_diagram_page: false,
        },
        TopicPage {
            id: "workflow",
            title: "Complete Workflow Diagram",
            subtitle: "Visual representation of the entire process",
            icon: "◈",
            search_terms: &[
                "workflow",
                "diagram",
                "flowchart",
                "visual",
                "mermaid",
                "process flow",
            ],
            sections: &[],
            quickstart: &[],
            is_diagram_page: true,
        },
        TopicPage {
            id: "user-guide",
            title: "User Guide & Quickstart",
            subtitle: "Step-by-step walkthrough with visuals",
            icon: "▶",
            search_terms: &[
                "user guide",
                "quickstart",
                "tutorial",
                "getting started",
                "play",
                "launch",
            ],
            sections: USER_GUIDE_SECTIONS,
            quickstart: QUICKSTART_STEPS,
            is_diagram_page: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_pages() {
        assert_eq!(catalog().len(), 6);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let pages = catalog();
        let ids: HashSet<_> = pages.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), pages.len());
    }

    #[test]
    fn test_search_terms_are_lowercase() {
        for page in catalog() {
            for term in page.search_terms {
                assert_eq!(*term, term.to_lowercase(), "term on page {}", page.id);
            }
        }
    }

    #[test]
    fn test_only_workflow_page_is_diagram() {
        let pages = catalog();
        let diagram: Vec<_> = pages.iter().filter(|p| p.is_diagram_page).collect();
        assert_eq!(diagram.len(), 1);
        assert_eq!(diagram[0].id, "workflow");
        assert!(diagram[0].sections.is_empty());
    }

    #[test]
    fn test_user_guide_carries_quickstart_steps() {
        let pages = catalog();
        let guide = pages.iter().find(|p| p.id == "user-guide").unwrap();
        assert_eq!(guide.quickstart.len(), 3);
    }
}
