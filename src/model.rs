//! Domain records as the portal UI sees them. Serde output matches the
//! portal's JSON shape (camelCase keys, role tags in caps).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Teacher,
    Student,
    Manager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
            Role::Manager => "MANAGER",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "TEACHER" => Some(Role::Teacher),
            "STUDENT" => Some(Role::Student),
            "MANAGER" => Some(Role::Manager),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub username: String,
    /// Classes this student is enrolled in, in enrollment order. Kept in
    /// lockstep with the owning classes' rosters.
    #[serde(default)]
    pub class_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// A portal account, keyed on role. Only students carry enrollment state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum User {
    #[serde(rename = "TEACHER")]
    Teacher(Teacher),
    #[serde(rename = "STUDENT")]
    Student(Student),
    #[serde(rename = "MANAGER")]
    Manager(Manager),
}

impl User {
    pub fn id(&self) -> &str {
        match self {
            User::Teacher(t) => &t.id,
            User::Student(s) => &s.id,
            User::Manager(m) => &m.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Teacher(t) => &t.name,
            User::Student(s) => &s.name,
            User::Manager(m) => &m.name,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            User::Teacher(t) => &t.username,
            User::Student(s) => &s.username,
            User::Manager(m) => &m.username,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Teacher(_) => Role::Teacher,
            User::Student(_) => Role::Student,
            User::Manager(_) => Role::Manager,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            User::Student(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    /// Owning teacher, set at creation and never reassigned. May name a
    /// user that does not exist.
    pub teacher_id: String,
    /// Roster in enrollment order.
    pub student_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub student_id: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub class_id: String,
    pub date: NaiveDate,
    pub topic: String,
    pub attendance: Vec<Attendance>,
}

/// Lesson input before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub class_id: String,
    pub date: NaiveDate,
    pub topic: String,
    pub attendance: Vec<Attendance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub class_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Teacher-attached reference material, if any.
    pub file_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub class_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub activity_id: String,
    pub student_id: String,
    pub submitted_at: DateTime<Utc>,
    pub file_url: String,
    pub grade: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub activity_id: String,
    pub student_id: String,
    pub submitted_at: DateTime<Utc>,
    pub file_url: String,
    pub grade: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_role_tag() {
        let user = User::Student(Student {
            id: "s1".into(),
            name: "Bruno Costa".into(),
            username: "bruno.costa".into(),
            class_ids: vec!["c1".into()],
        });
        let v = serde_json::to_value(&user).expect("serialize");
        assert_eq!(v["role"], "STUDENT");
        assert_eq!(v["classIds"][0], "c1");

        let back: User = serde_json::from_value(v).expect("deserialize");
        assert_eq!(back.role(), Role::Student);
        assert_eq!(back.username(), "bruno.costa");
    }

    #[test]
    fn role_tags_round_trip() {
        for role in [Role::Teacher, Role::Student, Role::Manager] {
            assert_eq!(Role::from_tag(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_tag("PRINCIPAL"), None);
    }
}
