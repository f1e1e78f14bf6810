/// Every page the location fragment can select.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Messages,
    Profile,
    NetworkConnections,
    ActiveProjects,
    UpcomingEvents,
    CollaborationDetails,
    AlumniCommunity,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Messages,
        Page::Profile,
        Page::NetworkConnections,
        Page::ActiveProjects,
        Page::UpcomingEvents,
        Page::CollaborationDetails,
        Page::AlumniCommunity,
    ];

    /// Resolves a location fragment, with or without its leading `#`.
    /// Anything unrecognized lands on the dashboard.
    pub fn from_fragment(fragment: &str) -> Page {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Page::ALL
            .into_iter()
            .find(|page| page.fragment() == fragment)
            .unwrap_or_default()
    }

    pub fn fragment(&self) -> &'static str {
        use Page::*;
        match self {
            Dashboard => "dashboard",
            Messages => "messages",
            Profile => "profile",
            NetworkConnections => "network-connections",
            ActiveProjects => "active-projects",
            UpcomingEvents => "upcoming-events",
            CollaborationDetails => "collaboration-details",
            AlumniCommunity => "alumni-community",
        }
    }

    pub fn title(&self) -> &'static str {
        use Page::*;
        match self {
            Dashboard => "Dashboard",
            Messages => "Message Center",
            Profile => "Profile",
            NetworkConnections => "Network Connections",
            ActiveProjects => "Active Projects",
            UpcomingEvents => "Upcoming Events",
            CollaborationDetails => "Collaboration Details",
            AlumniCommunity => "Alumni Community",
        }
    }

    /// Subpages offer a way back to wherever the user came from.
    pub fn has_back_link(&self) -> bool {
        !matches!(self, Page::Dashboard | Page::Messages | Page::Profile)
    }
}
