//! The fixture dataset a fresh portal starts from: one teacher, one
//! manager, five students spread across two classes, plus a little history
//! (two lessons, two activities, two submissions). Ids keep their original
//! short forms so UI fixtures can reference them directly.

use chrono::Utc;
use rusqlite::Connection;

use crate::error::StoreError;
use crate::model::Attendance;

pub(crate) fn apply(conn: &Connection) -> Result<(), StoreError> {
    let users = [
        ("t1", "Prof. Ana Silva", "ana.silva", "TEACHER"),
        ("m1", "Gestor Carlos", "carlos.gestor", "MANAGER"),
        ("s1", "Bruno Costa", "bruno.costa", "STUDENT"),
        ("s2", "Carla Dias", "carla.dias", "STUDENT"),
        ("s3", "Daniel Alves", "daniel.alves", "STUDENT"),
        ("s4", "Eduarda Lima", "eduarda.lima", "STUDENT"),
        ("s5", "Felipe Souza", "felipe.souza", "STUDENT"),
    ];
    for (id, name, username, role) in users {
        conn.execute(
            "INSERT INTO users(id, name, username, role) VALUES(?, ?, ?, ?)",
            (id, name, username, role),
        )?;
    }

    conn.execute(
        "INSERT INTO classes(id, name, teacher_id) VALUES(?, ?, ?)",
        ("c1", "Matemática - 9º Ano A", "t1"),
    )?;
    conn.execute(
        "INSERT INTO classes(id, name, teacher_id) VALUES(?, ?, ?)",
        ("c2", "Ciências - 9º Ano B", "t1"),
    )?;

    // Roster order matters: it is what student_ids/class_ids read back in.
    let enrollments = [
        ("c1", "s1"),
        ("c1", "s2"),
        ("c1", "s3"),
        ("c2", "s2"),
        ("c2", "s4"),
        ("c2", "s5"),
    ];
    for (class_id, student_id) in enrollments {
        conn.execute(
            "INSERT INTO enrollments(class_id, student_id) VALUES(?, ?)",
            (class_id, student_id),
        )?;
    }

    let l1_attendance = attendance_json(&[("s1", true), ("s2", true), ("s3", false)])?;
    conn.execute(
        "INSERT INTO lessons(id, class_id, date, topic, attendance_json)
         VALUES(?, ?, ?, ?, ?)",
        (
            "l1",
            "c1",
            "2024-07-20",
            "Introdução a Álgebra",
            &l1_attendance,
        ),
    )?;
    let l2_attendance = attendance_json(&[("s1", true), ("s2", false), ("s3", true)])?;
    conn.execute(
        "INSERT INTO lessons(id, class_id, date, topic, attendance_json)
         VALUES(?, ?, ?, ?, ?)",
        (
            "l2",
            "c1",
            "2024-07-22",
            "Equações de Primeiro Grau",
            &l2_attendance,
        ),
    )?;

    conn.execute(
        "INSERT INTO activities(id, class_id, title, description, due_date, file_url)
         VALUES(?, ?, ?, ?, ?, ?)",
        (
            "a1",
            "c1",
            "Lista de Exercícios 1",
            "Resolver os exercícios da página 25.",
            "2024-07-28",
            Some("path/to/file1.pdf"),
        ),
    )?;
    conn.execute(
        "INSERT INTO activities(id, class_id, title, description, due_date, file_url)
         VALUES(?, ?, ?, ?, ?, ?)",
        (
            "a2",
            "c2",
            "Relatório de Laboratório",
            "Descrever o experimento sobre fotossíntese.",
            "2024-08-05",
            None::<&str>,
        ),
    )?;

    // Seed submissions are stamped at load time, like the original portal
    // stamping them at module init.
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO submissions(id, activity_id, student_id, submitted_at, file_url, grade)
         VALUES(?, ?, ?, ?, ?, ?)",
        (
            "sub1",
            "a1",
            "s1",
            &now,
            "path/to/submission1.pdf",
            None::<f64>,
        ),
    )?;
    conn.execute(
        "INSERT INTO submissions(id, activity_id, student_id, submitted_at, file_url, grade)
         VALUES(?, ?, ?, ?, ?, ?)",
        (
            "sub2",
            "a1",
            "s3",
            &now,
            "path/to/submission3.pdf",
            None::<f64>,
        ),
    )?;

    Ok(())
}

fn attendance_json(entries: &[(&str, bool)]) -> Result<String, StoreError> {
    let attendance: Vec<Attendance> = entries
        .iter()
        .map(|(student_id, present)| Attendance {
            student_id: (*student_id).to_string(),
            present: *present,
        })
        .collect();
    Ok(serde_json::to_string(&attendance)?)
}
