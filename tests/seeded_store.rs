use classportal::model::User;
use classportal::Store;

#[test]
fn seed_matches_the_portal_fixtures() -> anyhow::Result<()> {
    let store = Store::open_seeded()?;

    let users = store.all_users()?;
    assert_eq!(users.len(), 7);
    assert_eq!(users[0].username(), "ana.silva");

    let bruno = store.login("bruno.costa", "")?.expect("seed account");
    match bruno {
        User::Student(ref s) => assert_eq!(s.class_ids, vec!["c1".to_string()]),
        ref other => panic!("expected student, got {other:?}"),
    }

    let classes = store.classes_by_teacher("t1")?;
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].name, "Matemática - 9º Ano A");
    assert_eq!(
        classes[0].student_ids,
        vec!["s1".to_string(), "s2".to_string(), "s3".to_string()]
    );

    // Carla sits in both classes, c1 first.
    let carla_classes = store.classes_by_student("s2")?;
    let ids: Vec<&str> = carla_classes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    Ok(())
}

#[test]
fn seeded_history_reads_back() -> anyhow::Result<()> {
    let store = Store::open_seeded()?;

    let lessons = store.lessons_by_class("c1")?;
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].id, "l2");
    assert_eq!(lessons[0].topic, "Equações de Primeiro Grau");
    assert_eq!(lessons[1].attendance.len(), 3);

    let activities = store.activities_by_class("c1")?;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].file_url.as_deref(), Some("path/to/file1.pdf"));

    let sub = store
        .submission_for_activity("a1", "s1")?
        .expect("seed submission");
    assert_eq!(sub.id, "sub1");
    assert_eq!(sub.file_url, "path/to/submission1.pdf");
    assert!(sub.grade.is_none());

    assert_eq!(store.submissions_for_activity("a1")?.len(), 2);
    assert!(store.submissions_for_activity("a2")?.is_empty());
    Ok(())
}

#[test]
fn seeded_stores_are_independent() -> anyhow::Result<()> {
    let mut first = Store::open_seeded()?;
    let second = Store::open_seeded()?;

    assert!(first.delete_class("c1")?);
    assert!(first.classes_by_student("s1")?.is_empty());

    // No shared state leaks between instances.
    assert_eq!(second.classes_by_teacher("t1")?.len(), 2);
    assert_eq!(second.classes_by_student("s1")?.len(), 1);
    Ok(())
}
