#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{Client, EntityKind, FieldType, Instructor, Record, Routine, Value};

    #[test]
    fn test_columns_exclude_identity() {
        for kind in EntityKind::ALL {
            assert!(
                kind.columns().iter().all(|c| c.name != "id"),
                "{} schema must not contain the identity field",
                kind
            );
        }
    }

    #[test]
    fn test_columns_preserve_declared_order() {
        let names: Vec<&str> = EntityKind::Client.columns().iter().map(|c| c.name).collect();
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

        let names: Vec<&str> = EntityKind::Routine.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name", "pdf_link"]);

        let names: Vec<&str> = EntityKind::Instructor.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name", "last_name"]);
    }

    #[test]
    fn test_table_names_are_lowercase_entity_names() {
        assert_eq!(EntityKind::Routine.table(), "routine");
        assert_eq!(EntityKind::Instructor.table(), "instructor");
        assert_eq!(EntityKind::Client.table(), "client");
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(EntityKind::from_name("Client").unwrap(), EntityKind::Client);
        assert_eq!(EntityKind::from_name("ROUTINE").unwrap(), EntityKind::Routine);
        assert_eq!(
            EntityKind::from_name("instructor").unwrap(),
            EntityKind::Instructor
        );
    }

    #[test]
    fn test_from_name_rejects_unregistered() {
        let err = EntityKind::from_name("membership").unwrap_err();
        assert_eq!(err.0, "membership");
    }

    #[test]
    fn test_relation_columns_follow_id_suffix() {
        let columns = EntityKind::Client.columns();
        let instructor_col = columns.iter().find(|c| c.name == "instructor_id").unwrap();
        let routine_col = columns.iter().find(|c| c.name == "routine_id").unwrap();
        let cycle_col = columns.iter().find(|c| c.name == "routine_cycle").unwrap();

        assert!(instructor_col.is_relation());
        assert_eq!(instructor_col.related_kind(), Some(EntityKind::Instructor));
        assert!(routine_col.is_relation());
        assert_eq!(routine_col.related_kind(), Some(EntityKind::Routine));
        assert!(!cycle_col.is_relation());
        assert_eq!(cycle_col.related_kind(), None);
    }

    #[test]
    fn test_client_field_types() {
        let types: Vec<FieldType> = EntityKind::Client
            .columns()
            .iter()
            .map(|c| c.field_type)
            .collect();
        assert_eq!(
            types,
            vec![
                FieldType::Text,
                FieldType::Text,
                FieldType::Date,
                FieldType::Date,
                FieldType::OptionalInteger,
                FieldType::OptionalInteger,
                FieldType::Integer,
            ]
        );
    }

    #[test]
    fn test_record_values_align_with_columns() {
        let client = Record::Client(Client {
            id: Some(7),
            name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            routine_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            routine_end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            instructor_id: Some(1),
            routine_id: None,
            routine_cycle: 2,
        });

        let columns = client.kind().columns();
        let values = client.values();
        assert_eq!(columns.len(), values.len());
        for (column, value) in columns.iter().zip(&values) {
            assert_eq!(column.field_type, value.field_type(), "{}", column.name);
        }
    }

    #[test]
    fn test_record_from_values_round_trip() {
        let instructor = Record::Instructor(Instructor {
            id: Some(3),
            name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
        });
        let rebuilt =
            Record::from_values(EntityKind::Instructor, Some(3), &instructor.values()).unwrap();
        assert_eq!(rebuilt, instructor);
    }

    #[test]
    fn test_record_from_values_rejects_shape_mismatch() {
        // Routine expects two text values.
        let values = vec![Value::Text("Cardio".to_string()), Value::Integer(1)];
        assert!(Record::from_values(EntityKind::Routine, None, &values).is_none());

        // Trailing values are a mismatch too.
        let values = vec![
            Value::Text("Cardio".to_string()),
            Value::Text("x.pdf".to_string()),
            Value::Text("extra".to_string()),
        ];
        assert!(Record::from_values(EntityKind::Routine, None, &values).is_none());
    }

    #[test]
    fn test_with_id_assigns_identity() {
        let routine = Record::Routine(Routine {
            id: None,
            name: "Cardio".to_string(),
            pdf_link: "x.pdf".to_string(),
        });
        assert_eq!(routine.id(), None);
        assert_eq!(routine.with_id(12).id(), Some(12));
    }

    #[test]
    fn test_client_is_complete() {
        let mut client = Client {
            id: None,
            name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            routine_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            routine_end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            instructor_id: Some(1),
            routine_id: Some(1),
            routine_cycle: 1,
        };
        assert!(client.is_complete());

        client.routine_id = None;
        assert!(!client.is_complete());
    }
}
