use diesel::prelude::*;

/// Course row as stored in the `course` table
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::course)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub available: bool,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::course)]
pub struct NewCourse {
    pub name: String,
    pub available: bool,
}

#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::course)]
pub struct UpdateCourse {
    pub name: String,
    pub available: bool,
}

impl NewCourse {
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            name: self.name,
            available: self.available,
        }
    }
}
