use chrono::NaiveDate;
use contracts::domain::a005_issue::{IssuesByDateRequest, IssuesByGroupRequest};
use contracts::shared::dates::{parse_wire_date, to_wire_date};

use crate::shared::date_utils::format_date;

pub const DAY_TAB_PREFIX: &str = "a005_issue_day_";
pub const GROUP_TAB_PREFIX: &str = "a005_issue_group_";

/// Which issues an issue page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueScope {
    /// Opened from a day header.
    Day { date: NaiveDate },
    /// Opened from a group card.
    Group {
        date: NaiveDate,
        project_id: i64,
        production_type: String,
    },
}

impl IssueScope {
    pub fn date(&self) -> NaiveDate {
        match self {
            IssueScope::Day { date } | IssueScope::Group { date, .. } => *date,
        }
    }

    /// `a005_issue_day_{date}` or `a005_issue_group_{date}__{projectId}__{productionType}`
    pub fn tab_key(&self) -> String {
        match self {
            IssueScope::Day { date } => format!("{}{}", DAY_TAB_PREFIX, to_wire_date(*date)),
            IssueScope::Group {
                date,
                project_id,
                production_type,
            } => format!(
                "{}{}__{}__{}",
                GROUP_TAB_PREFIX,
                to_wire_date(*date),
                project_id,
                production_type
            ),
        }
    }

    pub fn from_tab_key(key: &str) -> Option<Self> {
        if let Some(rest) = key.strip_prefix(DAY_TAB_PREFIX) {
            return parse_wire_date(rest).ok().map(|date| IssueScope::Day { date });
        }
        let rest = key.strip_prefix(GROUP_TAB_PREFIX)?;
        let mut parts = rest.splitn(3, "__");
        let date = parse_wire_date(parts.next()?).ok()?;
        let project_id = parts.next()?.parse().ok()?;
        let production_type = parts.next()?.to_string();
        Some(IssueScope::Group {
            date,
            project_id,
            production_type,
        })
    }

    pub fn tab_title(&self, project_name: Option<&str>) -> String {
        match self {
            IssueScope::Day { date } => format!("Issues · {}", format_date(*date)),
            IssueScope::Group {
                date,
                production_type,
                ..
            } => match project_name {
                Some(name) => format!("{} · {} · {}", name, production_type, format_date(*date)),
                None => format!("{} · {}", production_type, format_date(*date)),
            },
        }
    }

    pub fn group_request(&self) -> Option<IssuesByGroupRequest> {
        match self {
            IssueScope::Group {
                date,
                project_id,
                production_type,
            } => Some(IssuesByGroupRequest {
                date: to_wire_date(*date),
                project_id: *project_id,
                production_type: production_type.clone(),
            }),
            IssueScope::Day { .. } => None,
        }
    }

    pub fn date_request(&self) -> IssuesByDateRequest {
        IssuesByDateRequest {
            date: to_wire_date(self.date()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    #[test]
    fn test_tab_key_round_trip() {
        let day = IssueScope::Day { date: d("2025-10-21") };
        assert_eq!(day.tab_key(), "a005_issue_day_2025-10-21");
        assert_eq!(IssueScope::from_tab_key(&day.tab_key()), Some(day));

        let group = IssueScope::Group {
            date: d("2025-10-21"),
            project_id: 5,
            production_type: "Lazer__Kesim".into(),
        };
        assert_eq!(group.tab_key(), "a005_issue_group_2025-10-21__5__Lazer__Kesim");
        assert_eq!(IssueScope::from_tab_key(&group.tab_key()), Some(group));
    }

    #[test]
    fn test_bad_keys() {
        assert_eq!(IssueScope::from_tab_key("a001_item"), None);
        assert_eq!(IssueScope::from_tab_key("a005_issue_day_tomorrow"), None);
        assert_eq!(IssueScope::from_tab_key("a005_issue_group_2025-10-21__x__Lazer"), None);
        assert_eq!(IssueScope::from_tab_key("a005_issue_group_2025-10-21__5"), None);
    }

    #[test]
    fn test_requests_use_plain_dates() {
        let group = IssueScope::Group {
            date: d("2025-10-21"),
            project_id: 5,
            production_type: "Lazer".into(),
        };
        let request = group.group_request().unwrap();
        assert_eq!(request.date, "2025-10-21");
        assert_eq!(group.date_request().date, "2025-10-21");
        assert!(IssueScope::Day { date: d("2025-10-21") }.group_request().is_none());
        assert_eq!(group.tab_title(Some("Hat 5")), "Hat 5 · Lazer · 21.10.2025");
    }
}
