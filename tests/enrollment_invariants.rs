use classportal::model::Role;
use classportal::Store;

#[test]
fn enrollment_updates_both_sides() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let teacher = store.create_user("Prof. Ana Silva", "ana.silva", Role::Teacher)?;
    let class = store.create_class("Matemática", teacher.id())?;
    let student = store.create_user("Bruno Costa", "bruno.costa", Role::Student)?;

    assert!(store.add_student_to_class(&class.id, student.id())?);

    let roster = store.students_in_class(&class.id)?;
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, student.id());
    assert_eq!(roster[0].class_ids, vec![class.id.clone()]);

    let enrolled_in = store.classes_by_student(student.id())?;
    assert_eq!(enrolled_in.len(), 1);
    assert_eq!(enrolled_in[0].id, class.id);
    assert_eq!(enrolled_in[0].student_ids, vec![student.id().to_string()]);

    assert!(store.remove_student_from_class(&class.id, student.id())?);
    assert!(store.students_in_class(&class.id)?.is_empty());
    assert!(store.classes_by_student(student.id())?.is_empty());
    Ok(())
}

#[test]
fn duplicate_enrollment_is_refused() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let class = store.create_class("Ciências", "t1")?;
    let student = store.create_user("Carla Dias", "carla.dias", Role::Student)?;

    assert!(store.add_student_to_class(&class.id, student.id())?);
    assert!(!store.add_student_to_class(&class.id, student.id())?);

    let roster = store.students_in_class(&class.id)?;
    assert_eq!(roster.len(), 1);
    Ok(())
}

#[test]
fn removal_is_permissive_where_add_is_not() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let class = store.create_class("História", "t1")?;
    let student = store.create_user("Daniel Alves", "daniel.alves", Role::Student)?;

    // Removing a never-enrolled student still reports success; only an
    // unknown class is a soft failure.
    assert!(store.remove_student_from_class(&class.id, student.id())?);
    assert!(!store.remove_student_from_class("missing", student.id())?);
    assert!(!store.add_student_to_class("missing", student.id())?);
    Ok(())
}

#[test]
fn unknown_student_id_lands_on_roster_but_resolves_to_nothing() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let class = store.create_class("Geografia", "t1")?;

    // The store takes the student id as given.
    assert!(store.add_student_to_class(&class.id, "ghost")?);

    let classes = store.classes_by_teacher("t1")?;
    assert_eq!(classes[0].student_ids, vec!["ghost".to_string()]);
    assert!(store.students_in_class(&class.id)?.is_empty());
    Ok(())
}

#[test]
fn roster_keeps_enrollment_order() -> anyhow::Result<()> {
    let mut store = Store::open()?;
    let class = store.create_class("Artes", "t1")?;
    let a = store.create_user("Eduarda Lima", "eduarda.lima", Role::Student)?;
    let b = store.create_user("Felipe Souza", "felipe.souza", Role::Student)?;

    assert!(store.add_student_to_class(&class.id, b.id())?);
    assert!(store.add_student_to_class(&class.id, a.id())?);

    let classes = store.classes_by_teacher("t1")?;
    assert_eq!(
        classes[0].student_ids,
        vec![b.id().to_string(), a.id().to_string()]
    );
    Ok(())
}
