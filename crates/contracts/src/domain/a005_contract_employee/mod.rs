pub mod aggregate;

pub use aggregate::{
    ContractEmployee, ContractEmployeeFacet, ContractEmployeeSortKey, ContractEmployeeStats,
    ContractType, EmploymentStatus,
};
