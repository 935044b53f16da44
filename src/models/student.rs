use diesel::prelude::*;
use jiff_diesel::Date;

/// Student row as stored in the `student` table
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::student)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub birthday: Date,
}

/// NewStudent model for inserting new records; the id is assigned by the store
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::student)]
pub struct NewStudent {
    pub name: String,
    pub birthday: Date,
}

/// Full replacement of the mutable student fields
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::student)]
pub struct UpdateStudent {
    pub name: String,
    pub birthday: Date,
}

impl NewStudent {
    /// Materializes the row under the given id.
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            birthday: self.birthday,
        }
    }
}
