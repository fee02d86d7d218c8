use contracts::domain::a005_contract_employee::{ContractEmployee, ContractType, EmploymentStatus};

use crate::shared::data::store::{get_store, seed_date};

pub fn list_all() -> &'static [ContractEmployee] {
    &get_store().contract_employees
}

pub fn get_by_id(id: &str) -> Option<ContractEmployee> {
    list_all().iter().find(|e| e.id == id).cloned()
}

struct Row<'a> {
    name: &'a str,
    department: &'a str,
    designation: &'a str,
    agency: &'a str,
    contract_type: ContractType,
    status: EmploymentStatus,
    daily_rate: i64,
    start: (i32, u32, u32),
    location: &'a str,
}

impl Row<'_> {
    fn into_employee(self, n: u32) -> ContractEmployee {
        let start_date = seed_date(self.start.0, self.start.1, self.start.2);
        // срочные договоры заключаются на полгода
        let end_date = match self.contract_type {
            ContractType::FixedTerm => Some(start_date + chrono::Duration::days(182)),
            _ => None,
        };
        ContractEmployee {
            id: format!("ce-{:03}", n),
            employee_code: format!("CE-{:03}", n),
            name: self.name.to_string(),
            department: self.department.to_string(),
            designation: self.designation.to_string(),
            contractor_agency: self.agency.to_string(),
            contract_type: self.contract_type,
            status: self.status,
            daily_rate: self.daily_rate,
            start_date,
            end_date,
            location: self.location.to_string(),
        }
    }
}

pub fn seed() -> Vec<ContractEmployee> {
    use ContractType::*;
    use EmploymentStatus::*;
    let rows = vec![
        Row { name: "Ravi Kumar", department: "Production", designation: "CNC Operator", agency: "Skyline Manpower", contract_type: FixedTerm, status: Active, daily_rate: 1_200, start: (2025, 4, 1), location: "Pune" },
        Row { name: "Sunita Patil", department: "Installation", designation: "Site Supervisor", agency: "BuildForce Staffing", contract_type: ProjectBased, status: Active, daily_rate: 1_800, start: (2025, 6, 15), location: "Mumbai" },
        Row { name: "Imran Shaikh", department: "Production", designation: "Edge Bander", agency: "Skyline Manpower", contract_type: Hourly, status: Pending, daily_rate: 950, start: (2025, 10, 20), location: "Pune" },
        Row { name: "Anita Desai", department: "Quality", designation: "QC Inspector", agency: "QualityFirst Services", contract_type: FixedTerm, status: Completed, daily_rate: 1_400, start: (2024, 11, 1), location: "Pune" },
        Row { name: "Deepak Yadav", department: "Installation", designation: "Fitter", agency: "BuildForce Staffing", contract_type: ProjectBased, status: Active, daily_rate: 1_100, start: (2025, 8, 4), location: "Navi Mumbai" },
        Row { name: "Kavita Menon", department: "Design", designation: "3D Visualiser", agency: "CreativeHire", contract_type: Hourly, status: Active, daily_rate: 2_200, start: (2025, 2, 10), location: "Bengaluru" },
        Row { name: "Mohan Das", department: "Logistics", designation: "Driver", agency: "Skyline Manpower", contract_type: FixedTerm, status: Terminated, daily_rate: 900, start: (2025, 1, 6), location: "Pune" },
    ];
    rows.into_iter()
        .zip(1..)
        .map(|(row, n)| row.into_employee(n))
        .collect()
}
