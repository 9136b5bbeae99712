#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::forms::fields::{display_label, fields_for, Control};
    use crate::forms::view::{
        client_row, instructor_row, routine_row, LabelIndex, MISSING_LABEL,
    };
    use crate::models::{Client, EntityKind, Instructor, Record, Routine};

    fn sample_client() -> Client {
        Client {
            id: Some(1),
            name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            routine_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            routine_end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            instructor_id: Some(1),
            routine_id: Some(1),
            routine_cycle: 2,
        }
    }

    fn sample_labels() -> LabelIndex {
        let instructors = vec![Record::Instructor(Instructor {
            id: Some(1),
            name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
        })];
        let routines = vec![Record::Routine(Routine {
            id: Some(1),
            name: "Cardio".to_string(),
            pdf_link: "x.pdf".to_string(),
        })];
        LabelIndex::new(&instructors, &routines)
    }

    #[test]
    fn test_client_row_substitutes_labels_and_collapses_dates() {
        let row = client_row(&sample_client(), &sample_labels());
        assert_eq!(row.full_name, "Ana Lopez");
        assert_eq!(row.routine, "Cardio");
        assert_eq!(row.cycle, "2");
        assert_eq!(row.dates, "01-01-2024 - 01-06-2024");
    }

    #[test]
    fn test_missing_reference_renders_placeholder() {
        let mut client = sample_client();
        client.routine_id = Some(99);
        let row = client_row(&client, &sample_labels());
        assert_eq!(row.routine, MISSING_LABEL);

        client.routine_id = None;
        let row = client_row(&client, &sample_labels());
        assert_eq!(row.routine, MISSING_LABEL);
    }

    #[test]
    fn test_instructor_label_lookup() {
        let labels = sample_labels();
        assert_eq!(labels.instructor_label(Some(1)), "Juan Pérez");
        assert_eq!(labels.instructor_label(Some(7)), MISSING_LABEL);
        assert_eq!(labels.instructor_label(None), MISSING_LABEL);
    }

    #[test]
    fn test_routine_and_instructor_rows() {
        let routine = Routine {
            id: Some(4),
            name: "Cardio".to_string(),
            pdf_link: "x.pdf".to_string(),
        };
        let row = routine_row(&routine);
        assert_eq!(row.id, Some(4));
        assert_eq!(row.name, "Cardio");

        let instructor = Instructor {
            id: Some(1),
            name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
        };
        let row = instructor_row(&instructor);
        assert_eq!(row.full_name, "Juan Pérez");
    }

    #[test]
    fn test_client_row_serializes_with_display_values() {
        let row = client_row(&sample_client(), &sample_labels());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["full_name"], "Ana Lopez");
        assert_eq!(json["instructor"], "Juan Pérez");
        assert_eq!(json["dates"], "01-01-2024 - 01-06-2024");
    }

    #[test]
    fn test_display_label_title_cases_snake_case() {
        assert_eq!(display_label("last_name"), "Last Name");
        assert_eq!(display_label("pdf_link"), "Pdf Link");
        assert_eq!(display_label("name"), "Name");
    }

    #[test]
    fn test_fields_for_client_controls() {
        let fields = fields_for(EntityKind::Client);
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "last_name",
                "routine_start_date",
                "routine_end_date",
                "instructor_id",
                "routine_id",
                "routine_cycle",
            ]
        );

        let control_of = |name: &str| fields.iter().find(|f| f.name == name).unwrap().control;
        assert_eq!(control_of("name"), Control::TextInput);
        assert_eq!(control_of("routine_start_date"), Control::DatePicker);
        assert_eq!(
            control_of("instructor_id"),
            Control::Select(EntityKind::Instructor)
        );
        assert_eq!(control_of("routine_id"), Control::Select(EntityKind::Routine));
        assert_eq!(control_of("routine_cycle"), Control::NumericInput);
    }
}
