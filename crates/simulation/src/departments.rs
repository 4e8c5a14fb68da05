//! Department building rosters and the law department.
//!
//! A department owns an ordered roster of building entities; buildings do
//! not know their owning department. Removal matches by entity identity and
//! removing an unknown building is a no-op.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Routing key for systems that need to reach a concrete department
/// resource (construction orders, demolition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepartmentId {
    PublicServices,
    Law,
}

impl DepartmentId {
    pub fn name(self) -> &'static str {
        match self {
            DepartmentId::PublicServices => "Public Services",
            DepartmentId::Law => "Law",
        }
    }
}

/// Base department state shared by every concrete department: a name and
/// the ordered roster of owned building entities.
#[derive(Debug, Clone, Default)]
pub struct Department {
    name: String,
    buildings: Vec<Entity>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buildings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a building to the roster.
    pub fn add_building(&mut self, building: Entity) {
        self.buildings.push(building);
    }

    /// Remove the first roster entry matching `building` by identity.
    /// Removing a building that was never added is a no-op.
    pub fn remove_building(&mut self, building: Entity) {
        if let Some(index) = self.buildings.iter().position(|b| *b == building) {
            self.buildings.remove(index);
        }
    }

    pub fn buildings(&self) -> &[Entity] {
        &self.buildings
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }
}

/// The law department: a building roster plus the list of laws in force.
#[derive(Resource, Debug, Clone)]
pub struct LawDepartment {
    pub department: Department,
    laws: Vec<String>,
}

impl Default for LawDepartment {
    fn default() -> Self {
        Self {
            department: Department::new("Law"),
            laws: Vec::new(),
        }
    }
}

impl LawDepartment {
    pub fn add_law(&mut self, law: impl Into<String>) {
        let law = law.into();
        info!("Enacted law: {}", law);
        self.laws.push(law);
    }

    /// Repeal the first law matching `law`; unknown laws are a no-op.
    pub fn remove_law(&mut self, law: &str) {
        if let Some(index) = self.laws.iter().position(|l| l == law) {
            info!("Repealed law: {}", law);
            self.laws.remove(index);
        }
    }

    /// Replace `previous` with `current` in place. Returns `false` without
    /// mutating anything when `previous` is not in force.
    pub fn change_law(&mut self, previous: &str, current: impl Into<String>) -> bool {
        match self.laws.iter().position(|l| l == previous) {
            Some(index) => {
                let current = current.into();
                info!("Amended law: {} -> {}", previous, current);
                self.laws[index] = current;
                true
            }
            None => false,
        }
    }

    pub fn laws(&self) -> &[String] {
        &self.laws
    }
}

pub struct DepartmentsPlugin;

impl Plugin for DepartmentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LawDepartment>();
    }
}
