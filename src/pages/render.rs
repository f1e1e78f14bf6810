use crate::{
    auth::{Role, User},
    connections::{ConnectionRequest, ConnectionStore, Slot},
    include_res,
    res::escape_html,
};

use super::{messages, mock, Page};

/// Renders the body the shell swaps in for `page`.
pub fn render_page<S: Slot>(
    page: Page,
    user: &User,
    connections: &ConnectionStore<S>,
    search: &str,
) -> String {
    let body = match page {
        Page::Dashboard => dashboard(user),
        Page::Messages => messages::render(search),
        Page::Profile => profile(user),
        Page::NetworkConnections => network(user, connections),
        Page::ActiveProjects => projects(),
        Page::UpcomingEvents => events(),
        Page::CollaborationDetails => collaboration(),
        Page::AlumniCommunity => community(),
    };

    let back = if page.has_back_link() {
        r#"<button class="back" onclick="history.back()">&larr; Back</button>"#
    } else {
        ""
    };

    include_res!(str, "/pages/page.html")
        .replace("{fragment}", page.fragment())
        .replace("{title}", page.title())
        .replace("{back}", back)
        .replace("{body}", &body)
}

pub fn header(user: &User) -> String {
    include_res!(str, "/pages/header.html")
        .replace("{role}", user.role.id())
        .replace("{role_label}", user.role.label())
        .replace("{initials}", &escape_html(&user.initials()))
        .replace("{name}", &escape_html(user.name))
        .replace("{email}", &escape_html(user.email))
}

fn card(heading: &str, inner: &str) -> String {
    format!(r#"<section class="card"><h3>{}</h3>{inner}</section>"#, escape_html(heading))
}

fn list<I, T, D>(items: I) -> String
where
    I: IntoIterator<Item = (T, D)>,
    T: AsRef<str>,
    D: AsRef<str>,
{
    let mut out = String::from("<ul>");
    for (title, detail) in items {
        out += &format!(
            r#"<li><strong>{}</strong><span class="muted">{}</span></li>"#,
            escape_html(title.as_ref()),
            escape_html(detail.as_ref()),
        );
    }
    out + "</ul>"
}

fn dashboard(user: &User) -> String {
    let data = mock::dashboard(user.role);

    let mut stats = String::new();
    for stat in data.stats {
        stats += &format!(
            r#"<div class="stat"><span class="value">{}</span><span>{}</span><span class="muted">{}</span></div>"#,
            stat.value, stat.label, stat.note,
        );
    }

    let mut sections = String::new();
    for section in data.sections {
        sections += &card(section.heading, &list(section.rows.iter().map(|r| (r.title, r.detail))));
    }

    let mut targets = String::new();
    for role in Role::ALL.into_iter().filter(|role| *role != user.role) {
        targets += &format!(r#"<option value="{}">{}</option>"#, role.id(), role.label());
    }

    include_res!(str, "/pages/dashboard.html")
        .replace("{name}", &escape_html(user.name))
        .replace("{welcome}", data.welcome)
        .replace("{stats}", &stats)
        .replace("{sections}", &sections)
        .replace("{targets}", &targets)
}

fn profile(user: &User) -> String {
    include_res!(str, "/pages/profile.html")
        .replace("{initials}", &escape_html(&user.initials()))
        .replace("{avatar}", user.avatar.unwrap_or(""))
        .replace("{name}", &escape_html(user.name))
        .replace("{email}", &escape_html(user.email))
        .replace("{handle}", user.handle)
        .replace("{role_label}", user.role.label())
}

fn request_item(req: &ConnectionRequest) -> String {
    let initials: String = req
        .from_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    include_res!(str, "/pages/request_item.html")
        .replace("{id}", &escape_html(&req.id))
        .replace("{initials}", &escape_html(&initials))
        .replace("{from_name}", &escape_html(&req.from_name))
        .replace("{from_role}", req.from_type.label())
        .replace("{time}", &escape_html(&req.time))
        .replace("{message}", &escape_html(req.message.as_deref().unwrap_or("")))
}

fn network<S: Slot>(user: &User, connections: &ConnectionStore<S>) -> String {
    let incoming: Vec<_> = connections.incoming(user.role).collect();

    let requests = if incoming.is_empty() {
        String::new()
    } else {
        let items: String = incoming.iter().map(|req| request_item(req)).collect();
        format!(
            r#"<section class="card requests"><h3>Connection Requests <span class="badge">{}</span></h3><p class="muted">Pending connection requests from other professionals</p>{items}</section>"#,
            incoming.len(),
        )
    };

    let mut contacts = String::new();
    for contact in mock::CONTACTS {
        contacts += &include_res!(str, "/pages/contact_card.html")
            .replace("{name}", contact.name)
            .replace("{role}", contact.role)
            .replace("{location}", contact.location)
            .replace("{program}", contact.program)
            .replace("{mutual}", &contact.mutual.to_string())
            .replace("{action}", if contact.connected { "Message" } else { "Connect" });
    }

    format!(
        r#"{requests}<section class="card"><h3>Your Network ({} connections)</h3><div class="grid">{contacts}</div></section>"#,
        mock::CONTACTS.len(),
    )
}

fn projects() -> String {
    mock::PROJECTS
        .iter()
        .map(|project| {
            card(
                project.title,
                &format!(
                    r#"<p>{}</p><p><span class="badge">{}</span> due {}</p><progress max="100" value="{}"></progress><p class="muted">Team: {}</p>"#,
                    escape_html(project.description),
                    project.status,
                    project.deadline,
                    project.progress,
                    escape_html(&project.team.join(", ")),
                ),
            )
        })
        .collect()
}

fn events() -> String {
    mock::EVENTS
        .iter()
        .map(|event| {
            let featured = if event.featured { r#" <span class="badge">Featured</span>"# } else { "" };
            card(
                event.title,
                &format!(
                    r#"<p><span class="badge">{}</span>{featured}</p><p>{} at {}, {}</p><p class="muted">{} attending</p>"#,
                    event.kind,
                    event.date,
                    event.time,
                    escape_html(event.location),
                    event.attendees,
                ),
            )
        })
        .collect()
}

fn collaboration() -> String {
    let opp = &mock::OPPORTUNITY;
    let requirements = list(opp.requirements.iter().map(|r| (*r, "")));
    let comments = list(opp.comments.iter().map(|c| (c.title, c.detail)));

    card(
        opp.title,
        &format!(
            r#"<p><span class="badge">{}</span> {} &middot; deadline {}</p><p>{}</p><p class="muted">Posted by {}</p><h4>Requirements</h4>{requirements}<h4>Discussion</h4>{comments}"#,
            opp.kind,
            escape_html(opp.location),
            opp.deadline,
            escape_html(opp.description),
            escape_html(opp.posted_by),
        ),
    )
}

fn community() -> String {
    let news = list(
        mock::NEWS
            .iter()
            .map(|n| (n.title, format!("{} by {}, {}", n.category, n.author, n.date))),
    );
    let topics = list(mock::TOPICS.iter().map(|t| (t.title, t.detail)));

    card("Community News", &news) + &card("Discussion Topics", &topics)
}
