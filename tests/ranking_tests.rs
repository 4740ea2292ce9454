use coursework::{
    Lecturer, Reviewer, Student,
    ranking::{
        Average, average_hw_for_course, average_lectures_for_course, rank_lecturers,
        rank_students, render_ranking,
    },
};

fn students() -> Vec<Student> {
    let mut reviewer = Reviewer::new("Some", "Buddy");
    reviewer.attach_course("Python");
    reviewer.attach_course("Git");

    let mut ruoy = Student::new("Ruoy", "Eman", "M");
    ruoy.enroll("Python");
    ruoy.enroll("Git");
    let mut anna = Student::new("Anna", "Smirnova", "F");
    anna.enroll("Python");
    let petr = Student::new("Petr", "Petrov", "M");

    reviewer.rate_hw(&mut ruoy, "Python", 10).unwrap();
    reviewer.rate_hw(&mut ruoy, "Git", 6).unwrap();
    reviewer.rate_hw(&mut anna, "Python", 7).unwrap();
    reviewer.rate_hw(&mut anna, "Python", 10).unwrap();

    vec![petr, ruoy, anna]
}

#[test]
fn course_average_pools_every_students_grades() {
    let students = students();
    assert_eq!(average_hw_for_course(&students, "Python"), 9.0);
    assert_eq!(average_hw_for_course(&students, "Git"), 6.0);
    assert_eq!(average_hw_for_course(&students, "Rust"), 0.0);
    assert_eq!(average_hw_for_course(&[], "Python"), 0.0);
}

#[test]
fn lecture_course_average_ignores_other_courses() {
    let mut student = Student::new("Ruoy", "Eman", "M");
    student.enroll("Python");
    student.enroll("Git");

    let mut l1 = Lecturer::new("Some", "Buddy");
    l1.attach_course("Python");
    l1.attach_course("Git");
    let mut l2 = Lecturer::new("Ivan", "Ivanov");
    l2.attach_course("Python");

    student.rate_lecture(&mut l1, "Python", 10).unwrap();
    student.rate_lecture(&mut l1, "Git", 2).unwrap();
    student.rate_lecture(&mut l2, "Python", 7).unwrap();

    let lecturers = [l1, l2];
    assert_eq!(average_lectures_for_course(&lecturers, "Python"), 8.5);
    assert_eq!(average_lectures_for_course(&lecturers, "Git"), 2.0);
}

#[test]
fn students_are_ranked_best_first() {
    let ranked = rank_students(&students());

    let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Anna Smirnova", "Ruoy Eman", "Petr Petrov"]);
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[0].average, Average(8.5));
    assert_eq!(ranked[2].average, Average(0.0));
}

#[test]
fn ties_keep_input_order() {
    let lecturers = [
        Lecturer::new("First", "One"),
        Lecturer::new("Second", "Two"),
        Lecturer::new("Third", "Three"),
    ];

    let ranked = rank_lecturers(&lecturers);
    let positions: Vec<_> = ranked
        .iter()
        .map(|r| (r.position, r.name.as_str()))
        .collect();
    assert_eq!(positions, [(1, "First One"), (2, "Second Two"), (3, "Third Three")]);
}

#[test]
fn rendered_table_has_headers_and_rounded_averages() {
    let table = render_ranking(&rank_students(&students()));

    for needle in ["#", "Name", "Average", "Anna Smirnova", "8.5", "0.0"] {
        assert!(table.contains(needle), "missing `{needle}` in\n{table}");
    }
}
