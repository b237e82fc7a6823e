//! Terminal rendering of [`Service`] results.
//!
//! [`Service`]: crate::Service

use std::collections::HashMap;

use itertools::Itertools as _;
use service::{
    domain::{agent, lead, property, Agent, Lead, Property},
    query::{notifications, properties::Markers, properties::PageState},
    read::property::list,
};

/// Renders a [`list::Page`] of [`Property`]s along with its pagination.
pub(crate) fn properties(page: &list::Page, state: &PageState) -> String {
    if page.items.is_empty() {
        return "No properties found.".to_owned();
    }

    let rows = page.items.iter().map(property_row).join("\n");
    let window = state
        .window
        .clone()
        .map(|n| {
            if n == state.info.page() {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .join(" ");
    format!(
        "{rows}\n\nPage {} of {} ({} properties): {window}{}{}",
        state.info.page(),
        state.info.total_pages(),
        state.info.total_count(),
        if state.info.has_previous() { " <prev" } else { "" },
        if state.info.has_next() { " next>" } else { "" },
    )
}

/// Renders a single [`Property`] row of a list.
fn property_row(p: &Property) -> String {
    let rooms = [
        p.beds.map(|n| format!("{n} bd")),
        p.baths.map(|n| format!("{n} ba")),
        p.sqft.map(|n| format!("{n} sqft")),
    ]
    .into_iter()
    .flatten()
    .join(", ");
    format!(
        "#{:<6} {:<12} {} | {}{}",
        u64::from(p.id),
        if p.price.is_zero() {
            "POA".to_owned()
        } else {
            p.price.to_string()
        },
        p.title,
        p.location,
        if rooms.is_empty() {
            String::new()
        } else {
            format!(" | {rooms}")
        },
    )
}

/// Renders the details of a [`Property`] and its [`property::Stats`], if
/// any.
pub(crate) fn property(
    p: &Property,
    stats: Option<&property::Stats>,
) -> String {
    let mut lines = vec![
        format!("#{} {}", p.id, p.title),
        format!("Price:    {}", p.price),
        format!("Location: {}", p.location),
    ];
    let kinds = [
        p.property_type.map(|t| t.to_string()),
        p.category.map(|c| c.to_string()),
        p.status.map(|s| s.to_string()),
    ]
    .into_iter()
    .flatten()
    .join(", ");
    if !kinds.is_empty() {
        lines.push(format!("Kind:     {kinds}"));
    }
    if !p.agents.is_empty() {
        lines.push(format!(
            "Agents:   {}",
            p.agents
                .iter()
                .map(|a| if a.is_primary {
                    format!("{} (primary)", a.name)
                } else {
                    a.name.clone()
                })
                .join(", "),
        ));
    }
    if !p.description.is_empty() {
        lines.push(String::new());
        lines.push(p.description.clone());
    }
    if let Some(stats) = stats {
        lines.push(String::new());
        lines.push(format!("Stats: {:#}", **stats));
    }
    lines.join("\n")
}

/// Renders map [`Markers`].
pub(crate) fn markers(m: &Markers) -> String {
    let head = format!(
        "Viewport: {:.4}, {:.4} (zoom {})",
        m.viewport.center.latitude,
        m.viewport.center.longitude,
        m.viewport.zoom,
    );
    if m.markers.is_empty() {
        return format!("{head}\nNo properties could be located.");
    }
    let rows = m
        .markers
        .iter()
        .map(|mk| {
            format!(
                "{:>9.5} {:>9.5} {:<6} #{} {}",
                mk.coordinates.latitude,
                mk.coordinates.longitude,
                mk.label,
                mk.id,
                mk.title,
            )
        })
        .join("\n");
    format!("{head}\n{rows}")
}

/// Renders a list of [`Agent`]s.
pub(crate) fn agents(agents: &[Agent]) -> String {
    if agents.is_empty() {
        return "No agents found.".to_owned();
    }
    agents.iter().map(agent_row).join("\n")
}

/// Renders a single [`Agent`] row of a list.
fn agent_row(a: &Agent) -> String {
    let details = [
        a.position.clone(),
        a.branch.clone(),
        a.email.clone(),
        a.phone.clone().or_else(|| a.cell_number.clone()),
    ]
    .into_iter()
    .flatten()
    .join(" | ");
    format!(
        "#{:<5} {}{} {details}",
        u64::from(a.id),
        a.full_name(),
        if a.is_active { "" } else { " (inactive)" },
    )
}

/// Renders an [`Agent`] along with the [`Property`]s they're responsible for
/// and their [`agent::Stats`], if any.
pub(crate) fn agent(
    a: &Agent,
    properties: &[Property],
    stats: Option<&agent::Stats>,
) -> String {
    let mut lines = vec![agent_row(a), String::new()];
    if properties.is_empty() {
        lines.push("No properties.".to_owned());
    } else {
        lines.extend(properties.iter().map(property_row));
    }
    if let Some(stats) = stats {
        lines.push(String::new());
        lines.push(format!("Stats: {:#}", **stats));
    }
    lines.join("\n")
}

/// Renders a list of [`Lead`]s, naming their [`lead::Source`]s.
pub(crate) fn leads(leads: &[Lead], sources: &[lead::Source]) -> String {
    if leads.is_empty() {
        return "No leads found.".to_owned();
    }
    let sources = sources
        .iter()
        .map(|s| (s.id, s.name.as_str()))
        .collect::<HashMap<_, _>>();
    leads
        .iter()
        .map(|l| {
            let details = [
                l.status.map(|s| s.to_string()),
                l.source
                    .and_then(|id| sources.get(&id))
                    .map(|name| format!("via {name}")),
                l.property.map(|id| format!("property #{id}")),
                l.agent.map(|id| format!("agent #{id}")),
            ]
            .into_iter()
            .flatten()
            .join(", ");
            format!(
                "#{:<5} {} [{details}]",
                u64::from(l.id),
                l.contact_name,
            )
        })
        .join("\n")
}

/// Renders the [`notifications::Output`] of a
/// [`NotificationList`](service::query::NotificationList) query.
pub(crate) fn notifications(out: &notifications::Output) -> String {
    let head = format!("{} unread", out.unread_count);
    if out.items.is_empty() {
        return format!("{head}\nNo notifications.");
    }
    let rows = out
        .items
        .iter()
        .map(|n| {
            format!(
                "{} {} [{}] {}: {}",
                if n.read { " " } else { "*" },
                n.time,
                n.kind,
                n.title,
                n.message,
            )
        })
        .join("\n");
    format!("{head}\n{rows}")
}

#[cfg(test)]
mod spec {
    use service::{
        domain::{agent, notification, Agent, Lead, Notification, Property},
        geocode::{Coordinates, Marker, Source, Viewport},
        query::{notifications, properties::Markers, properties::PageState},
        read::property::list,
    };

    fn property(id: u64, price: &str, beds: u32) -> Property {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Property {id}"),
            "price": price,
            "location": "Borrowdale",
            "beds": beds,
        }))
        .unwrap()
    }

    #[test]
    fn renders_property_page() {
        let arguments = list::Arguments::new(3, 10).unwrap();
        let info = list::PageInfo::new(arguments, 25);
        let page = list::Page {
            items: vec![property(7, "250000", 3)],
            info,
        };
        let state = PageState {
            info,
            window: info.window(5),
        };

        let out = super::properties(&page, &state);

        assert!(out.starts_with("#7      $250,000     Property 7 | Borrowdale"));
        assert!(out.contains("3 bd"));
        assert!(out.ends_with("Page 3 of 3 (25 properties): 1 2 [3] <prev"));
    }

    #[test]
    fn renders_empty_results() {
        let info = list::PageInfo::new(list::Arguments::new(1, 10).unwrap(), 0);
        let page = list::Page {
            items: vec![],
            info,
        };
        let state = PageState {
            info,
            window: info.window(5),
        };

        assert_eq!(super::properties(&page, &state), "No properties found.");
        assert_eq!(super::agents(&[]), "No agents found.");
        assert_eq!(super::leads(&[], &[]), "No leads found.");
    }

    #[test]
    fn renders_poa_and_markers() {
        let p = property(1, "0", 2);
        let markers = Markers {
            viewport: Viewport::of(None),
            markers: vec![Marker {
                id: p.id,
                title: p.title.clone(),
                coordinates: Coordinates::new(-17.7581, 31.0879),
                label: p.price.short(),
                category: None,
                source: Source::Geocoded,
            }],
        };

        assert!(super::property(&p, None).contains("Price:    $0"));
        assert!(super::markers(&markers).contains("POA    #1 Property 1"));
    }

    #[test]
    fn renders_agents_and_leads() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": 3,
            "first_name": "Tendai",
            "last_name": "Moyo",
            "branch": "CBD",
            "is_active": false,
        }))
        .unwrap();
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "id": 5,
            "contact_name": "Rudo",
            "source": 2,
            "agent": 3,
        }))
        .unwrap();
        let source = serde_json::from_value(serde_json::json!({
            "id": 2,
            "name": "Website",
        }))
        .unwrap();

        assert_eq!(agent.id, agent::Id::from(3));
        assert_eq!(
            super::agents(&[agent]),
            "#3     Tendai Moyo (inactive) CBD",
        );
        assert_eq!(
            super::leads(&[lead], &[source]),
            "#5     Rudo [via Website, agent #3]",
        );
    }

    #[test]
    fn renders_agent_details() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": 4,
            "first_name": "Chipo",
            "last_name": "Dube",
        }))
        .unwrap();

        let out = super::agent(&agent, &[property(9, "120000", 2)], None);
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0].trim_end(), "#4     Chipo Dube");
        assert!(lines[2].starts_with("#9      $120,000"));
        assert!(super::agent(&agent, &[], None).ends_with("No properties."));
    }

    #[test]
    fn marks_unread_notifications() {
        let read = Notification {
            read: true,
            ..Notification::from(notification::Draft {
                title: "Seen".to_owned(),
                ..notification::Draft::default()
            })
        };
        let unread = Notification::from(notification::Draft {
            title: "Fresh".to_owned(),
            ..notification::Draft::default()
        });

        let out = super::notifications(&notifications::Output {
            items: vec![unread, read],
            unread_count: 1,
            last_fetched: None,
        });
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "1 unread");
        assert!(lines[1].starts_with('*'));
        assert!(lines[1].contains("[info] Fresh"));
        assert!(lines[2].starts_with(' '));
    }
}
