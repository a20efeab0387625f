use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked, DependencyRef};
use crate::errors::ServiceError;
use crate::models::{CreateEmployeeRequest, Employee, EmployeePatch, Warehouse};

#[derive(Clone)]
pub struct EmployeeService {
    employees: Repo<Employee>,
    warehouses: Repo<Warehouse>,
}

impl EmployeeService {
    pub fn new(employees: Repo<Employee>, warehouses: Repo<Warehouse>) -> Self {
        Self {
            employees,
            warehouses,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        self.employees.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Employee, ServiceError> {
        find_existing(self.employees.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, ServiceError> {
        let dependencies = vec![DependencyRef::new(
            request.warehouse_id,
            self.warehouses.as_ref(),
        )];
        create_checked(self.employees.as_ref(), Employee::from(request), dependencies).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: EmployeePatch) -> Result<Employee, ServiceError> {
        update_checked(self.employees.as_ref(), id, &patch, |employee| {
            vec![DependencyRef::new(
                employee.warehouse_id,
                self.warehouses.as_ref(),
            )]
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.employees.as_ref(), id).await?;
        self.employees.delete(id).await
    }
}
