//! Test fixture shared by the list_view unit tests

use std::cmp::Ordering;
use std::str::FromStr;

use super::error::ListViewError;
use super::params::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
}

pub const STAGES: [Stage; 5] = [
    Stage::Backlog,
    Stage::Todo,
    Stage::InProgress,
    Stage::Review,
    Stage::Done,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub status: String,
    pub salary: i64,
    pub stage: Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmployeeFacet {
    Department,
    Status,
}

impl FromStr for EmployeeFacet {
    type Err = ListViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "department" => Ok(Self::Department),
            "status" => Ok(Self::Status),
            other => Err(ListViewError::UnknownFacet(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortKey {
    Name,
    Salary,
}

impl FromStr for EmployeeSortKey {
    type Err = ListViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "salary" => Ok(Self::Salary),
            other => Err(ListViewError::UnknownSortKey(other.to_string())),
        }
    }
}

impl ListRecord for Employee {
    type Facet = EmployeeFacet;
    type SortKey = EmployeeSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }

    fn facet_value(&self, facet: EmployeeFacet) -> &str {
        match facet {
            EmployeeFacet::Department => &self.department,
            EmployeeFacet::Status => &self.status,
        }
    }

    fn compare_by(&self, other: &Self, key: EmployeeSortKey) -> Ordering {
        match key {
            EmployeeSortKey::Name => self.name.cmp(&other.name),
            EmployeeSortKey::Salary => self.salary.cmp(&other.salary),
        }
    }
}

fn employee(id: &str, name: &str, department: &str, status: &str, salary: i64, stage: Stage) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        department: department.into(),
        status: status.into(),
        salary,
        stage,
    }
}

/// Three Production+active rows, two Production+pending, one Quality+active
pub fn employees() -> Vec<Employee> {
    vec![
        employee("E1", "Premium Kitchen Sink", "Production", "active", 100_000, Stage::Todo),
        employee("E2", "Modular Cabinet", "Production", "active", 200_000, Stage::InProgress),
        employee("E3", "Soft-close Hinge", "Production", "active", 300_000, Stage::InProgress),
        employee("E4", "Granite Counter", "Production", "pending", 150_000, Stage::Done),
        employee("E5", "Drawer Channel", "Production", "pending", 300_000, Stage::Todo),
        employee("E6", "Quality Audit", "Quality", "active", 120_000, Stage::Done),
    ]
}
