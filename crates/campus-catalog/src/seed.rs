//! Built-in catalog listings used when no data file is configured.

use crate::model::{Course, FacultyMember, Section};

pub(crate) fn courses() -> Vec<Course> {
    vec![
        Course {
            slug: "intro-to-programming".to_owned(),
            code: "CS121".to_owned(),
            title: "Introduction to Programming".to_owned(),
            description: "Learn programming fundamentals using JavaScript and basic web \
                          development concepts."
                .to_owned(),
            credits: 3,
            sections: vec![
                Section::new("9:00 AM", "STC 392", "Brother Jack"),
                Section::new("2:00 PM", "STC 394", "Sister Enkey"),
                Section::new("11:00 AM", "STC 390", "Brother Keers"),
            ],
        },
        Course {
            slug: "college-algebra".to_owned(),
            code: "MATH110".to_owned(),
            title: "College Algebra".to_owned(),
            description: "Fundamental algebraic concepts including functions, graphing, and \
                          problem solving."
                .to_owned(),
            credits: 4,
            sections: vec![
                Section::new("8:00 AM", "MC 301", "Sister Anderson"),
                Section::new("1:00 PM", "MC 305", "Brother Miller"),
                Section::new("3:00 PM", "MC 307", "Brother Thompson"),
            ],
        },
        Course {
            slug: "academic-writing".to_owned(),
            code: "ENG101".to_owned(),
            title: "Academic Writing".to_owned(),
            description: "Develop writing skills for academic and professional communication."
                .to_owned(),
            credits: 3,
            sections: vec![
                Section::new("10:00 AM", "GEB 201", "Sister Anderson"),
                Section::new("12:00 PM", "GEB 205", "Brother Davis"),
                Section::new("4:00 PM", "GEB 203", "Sister Enkey"),
            ],
        },
    ]
}

pub(crate) fn faculty() -> Vec<FacultyMember> {
    [
        ("sister-enkey", "Sister Enkey", "Associate Professor", "Computer Science", "STC 311"),
        ("brother-jack", "Brother Jack", "Professor", "Computer Science", "STC 305"),
        ("sister-anderson", "Sister Anderson", "Professor", "Mathematics", "MC 210"),
        ("brother-keers", "Brother Keers", "Instructor", "Computer Science", "STC 318"),
        ("brother-thompson", "Brother Thompson", "Assistant Professor", "Mathematics", "MC 214"),
        ("brother-davis", "Brother Davis", "Professor", "English", "GEB 110"),
        ("brother-miller", "Brother Miller", "Instructor", "Mathematics", "MC 218"),
    ]
    .into_iter()
    .map(|(slug, name, title, department, office)| FacultyMember {
        slug: slug.to_owned(),
        name: name.to_owned(),
        title: title.to_owned(),
        department: department.to_owned(),
        office: Some(office.to_owned()),
        email: Some(format!("{}@example.edu", slug.replace('-', "."))),
        phone: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cs121_sections_in_meeting_order() {
        let courses = courses();
        let cs121 = courses.iter().find(|c| c.code == "CS121").unwrap();

        let professors: Vec<&str> = cs121.sections.iter().map(|s| s.professor.as_str()).collect();
        assert_eq!(professors, vec!["Brother Jack", "Sister Enkey", "Brother Keers"]);
    }

    #[test]
    fn test_faculty_source_order_is_not_alphabetical() {
        let faculty = faculty();

        assert_eq!(faculty[0].name, "Sister Enkey");
        assert_eq!(faculty[0].email.as_deref(), Some("sister.enkey@example.edu"));
    }
}
