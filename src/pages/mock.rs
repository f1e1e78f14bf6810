//! Static datasets the pages render. None of this is ever edited at runtime.

use crate::auth::Role;

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// A titled entry with a short secondary line, used by the dashboard lists.
pub struct Row {
    pub title: &'static str,
    pub detail: &'static str,
}

pub struct Section {
    pub heading: &'static str,
    pub rows: &'static [Row],
}

pub struct Dashboard {
    pub welcome: &'static str,
    pub stats: &'static [Stat],
    pub sections: &'static [Section],
}

pub struct Contact {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub program: &'static str,
    pub connected: bool,
    pub mutual: u32,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub progress: u8,
    pub team: &'static [&'static str],
    pub deadline: &'static str,
}

pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub attendees: u32,
    pub featured: bool,
}

pub struct News {
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub struct Opportunity {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub posted_by: &'static str,
    pub location: &'static str,
    pub deadline: &'static str,
    pub requirements: &'static [&'static str],
    pub comments: &'static [Row],
}

pub fn dashboard(role: Role) -> &'static Dashboard {
    match role {
        Role::Alumni => &ALUMNI_DASHBOARD,
        Role::Diaspora => &DIASPORA_DASHBOARD,
        Role::Admin => &ADMIN_DASHBOARD,
    }
}

static ALUMNI_DASHBOARD: Dashboard = Dashboard {
    welcome: "Stay connected with fellow alumni and discover new opportunities.",
    stats: &[
        Stat { label: "Network Connections", value: "127", note: "+12 this month" },
        Stat { label: "Active Projects", value: "3", note: "2 pending approval" },
        Stat { label: "Upcoming Events", value: "5", note: "Next: Innovation Conference" },
    ],
    sections: &[
        Section {
            heading: "Recent Connections",
            rows: &[
                Row { title: "Sarah Chen", detail: "Tech Entrepreneur, Silicon Valley (MIP 2019)" },
                Row { title: "Mark Vrudhula", detail: "Investment Banker, London (LEAD 2020)" },
                Row { title: "Elena Koci", detail: "Data Scientist, Berlin (MIP 2021)" },
            ],
        },
        Section {
            heading: "Opportunities",
            rows: &[
                Row { title: "Fintech Startup Co-founder", detail: "Partnership, 2 weeks left, 8 applicants" },
                Row { title: "AI Research Collaboration", detail: "Research, 1 month left, 12 applicants" },
                Row { title: "Mentorship Program Lead", detail: "Leadership, 3 days left, 5 applicants" },
            ],
        },
    ],
};

static DIASPORA_DASHBOARD: Dashboard = Dashboard {
    welcome: "Share your expertise and collaborate on projects back home.",
    stats: &[
        Stat { label: "Global Network", value: "89", note: "+5 new countries" },
        Stat { label: "Active Collaborations", value: "7", note: "3 cross-border projects" },
        Stat { label: "Mentorship Sessions", value: "12", note: "4 this month" },
    ],
    sections: &[
        Section {
            heading: "Global Projects",
            rows: &[
                Row { title: "Albania Tech Hub Initiative", detail: "Tirana, Albania, 8 partners, Active" },
                Row { title: "Diaspora Investment Fund", detail: "Multi-country, 15 partners, Planning" },
                Row { title: "Remote Work Academy", detail: "Online, 12 partners, Launching" },
            ],
        },
        Section {
            heading: "Mentorship Requests",
            rows: &[
                Row { title: "Andi Hoxha", detail: "Software Engineering, Pristina, 2 years" },
                Row { title: "Lira Spahiu", detail: "Marketing Strategy, Tirana, 1 year" },
                Row { title: "Erion Meta", detail: "Data Science, Shkodra, 3 years" },
            ],
        },
    ],
};

static ADMIN_DASHBOARD: Dashboard = Dashboard {
    welcome: "Platform overview and pending administrative work.",
    stats: &[
        Stat { label: "Total Users", value: "2,847", note: "+12.5%" },
        Stat { label: "Active Alumni", value: "1,923", note: "+8.2%" },
        Stat { label: "Diaspora Professionals", value: "724", note: "+15.7%" },
    ],
    sections: &[
        Section {
            heading: "Recent Activity",
            rows: &[
                Row { title: "New user registration", detail: "Elena Marku (alumni), 2 minutes ago" },
                Row { title: "Project collaboration started", detail: "Arben Koci (diaspora), 15 minutes ago" },
                Row { title: "Mentorship session completed", detail: "Sara Chen (alumni), 1 hour ago" },
            ],
        },
        Section {
            heading: "Pending Approvals",
            rows: &[
                Row { title: "AI Research Collaboration Project", detail: "Project by Dr. Ana Hoxha, High priority" },
                Row { title: "Innovation Conference 2024 Proposal", detail: "Event by AADF Events Team, Medium priority" },
                Row { title: "New Mentorship Program Guidelines", detail: "Program by Mentorship Committee, Low priority" },
            ],
        },
    ],
};

pub static CONTACTS: &[Contact] = &[
    Contact { name: "Sarah Chen", role: "Tech Entrepreneur", location: "Silicon Valley", program: "MIP 2019", connected: true, mutual: 12 },
    Contact { name: "Mark Vrudhula", role: "Investment Banker", location: "London", program: "LEAD 2020", connected: true, mutual: 8 },
    Contact { name: "Elena Koci", role: "Data Scientist", location: "Berlin", program: "MIP 2021", connected: true, mutual: 15 },
    Contact { name: "Andi Hoxha", role: "Software Engineer", location: "Pristina", program: "READ 2022", connected: false, mutual: 3 },
    Contact { name: "Lira Spahiu", role: "Marketing Director", location: "Tirana", program: "MIP 2020", connected: true, mutual: 10 },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Albania Tech Hub Initiative",
        description: "Building a technology ecosystem in Tirana to support local startups and connect with international markets.",
        status: "Active",
        progress: 75,
        team: &["Sarah Chen", "Mark Vrudhula", "Elena Koci"],
        deadline: "2024-12-15",
    },
    Project {
        title: "Diaspora Investment Fund",
        description: "Creating an investment vehicle to channel diaspora capital towards Albanian startups and SMEs.",
        status: "Planning",
        progress: 30,
        team: &["Andi Hoxha", "Lira Spahiu"],
        deadline: "2025-06-30",
    },
    Project {
        title: "Remote Work Academy",
        description: "Training program to prepare Albanian professionals for remote work opportunities with international companies.",
        status: "Launching",
        progress: 90,
        team: &["Erion Meta", "Sarah Chen"],
        deadline: "2024-10-01",
    },
];

pub static EVENTS: &[Event] = &[
    Event { title: "AADF Innovation Conference 2024", date: "2024-11-15", time: "09:00 AM", location: "Tirana International Hotel", kind: "Conference", attendees: 150, featured: true },
    Event { title: "Diaspora Tech Meetup", date: "2024-10-28", time: "06:00 PM", location: "Online Event", kind: "Meetup", attendees: 45, featured: false },
    Event { title: "Entrepreneurship Workshop", date: "2024-11-05", time: "02:00 PM", location: "Business Center, Pristina", kind: "Workshop", attendees: 30, featured: false },
    Event { title: "Alumni Reunion Dinner", date: "2024-12-20", time: "07:00 PM", location: "Hotel Rogner, Tirana", kind: "Social", attendees: 120, featured: false },
];

pub static NEWS: &[News] = &[
    News { title: "AADF Alumni Sarah Chen Raises $2M Series A for FinTech Startup", author: "AADF Staff", date: "2024-10-15", category: "Achievement" },
    News { title: "New Mentorship Program Launch: Connecting Generations", author: "Elena Koci", date: "2024-10-12", category: "Program" },
    News { title: "Alumni Spotlight: Mark Vrudhula's Journey from Banking to Impact Investing", author: "AADF Staff", date: "2024-10-10", category: "Story" },
];

pub static TOPICS: &[Row] = &[
    Row { title: "Entrepreneurship & Startups", detail: "45 posts, active 2h ago" },
    Row { title: "Career Development", detail: "23 posts, active 4h ago" },
    Row { title: "Technology & Innovation", detail: "67 posts, active 1h ago" },
    Row { title: "Investment & Finance", detail: "34 posts, active 3h ago" },
    Row { title: "Social Impact", detail: "28 posts, active 5h ago" },
];

pub static OPPORTUNITY: Opportunity = Opportunity {
    title: "Fintech Startup Co-founder",
    kind: "Partnership",
    description: "We are seeking a technical co-founder to join our fintech startup focused on digital banking solutions for the Albanian market.",
    posted_by: "Elena Koci, Founder & CEO at FinanceNext (MIP 2021)",
    location: "Tirana, Albania (Remote possible)",
    deadline: "2 weeks",
    requirements: &[
        "5+ years software engineering experience",
        "Experience with mobile app development",
        "Background in fintech or financial services",
        "Fluent in Albanian and English",
    ],
    comments: &[
        Row { title: "Mark Vrudhula", detail: "This sounds like an exciting opportunity! Would love to discuss further." },
        Row { title: "Sarah Chen", detail: "Great initiative Elena! I will share this with engineers in my network." },
    ],
};
