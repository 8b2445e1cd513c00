#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{DepartmentSeats, EmployeeRecord};

    pub fn sample_employee() -> EmployeeRecord {
        EmployeeRecord {
            employee_id: 7,
            first_name: "Mina".into(),
            last_name: "Park".into(),
            email: "mina@corp.example".into(),
            title: "Recruiter".into(),
            department_id: 2,
            department_name: Some("People".into()),
            photograph_path: Some("/uploads/mina.png".into()),
        }
    }

    pub fn sample_departments() -> Vec<DepartmentSeats> {
        vec![
            DepartmentSeats {
                department_id: 1,
                name: "Engineering".into(),
                seats_left: 0,
            },
            DepartmentSeats {
                department_id: 2,
                name: "People".into(),
                seats_left: 4,
            },
        ]
    }
}
