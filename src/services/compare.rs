use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{ComparedProduction, Comparison, CreditKey, ProductionDetail, SharedGroups, SharedPerson},
    services::providers::CatalogProvider,
};

const ACTING: &str = "Acting";
const DEFAULT_CAST_ROLE: &str = "Actor";
const DEFAULT_DEPARTMENT: &str = "Other";

/// One person's roles on a production, keyed by department in first-seen
/// order. A later role in the same department replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRoles {
    pub name: String,
    pub profile_path: Option<String>,
    pub roles: Vec<(String, String)>,
}

impl PersonRoles {
    fn set_role(&mut self, department: &str, role: String) {
        match self.roles.iter_mut().find(|(d, _)| d == department) {
            Some((_, existing)) => *existing = role,
            None => self.roles.push((department.to_string(), role)),
        }
    }

    fn has_department(&self, department: &str) -> bool {
        self.roles.iter().any(|(d, _)| d == department)
    }

    fn joined_roles(&self) -> String {
        self.roles
            .iter()
            .map(|(_, role)| role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everyone credited on a production, in credit order
#[derive(Debug, Default)]
pub struct PersonMap {
    order: Vec<u64>,
    people: HashMap<u64, PersonRoles>,
}

impl PersonMap {
    fn credit(&mut self, id: u64, name: &str, profile_path: Option<&str>, department: &str, role: String) {
        match self.people.get_mut(&id) {
            Some(person) => person.set_role(department, role),
            None => {
                self.order.push(id);
                self.people.insert(
                    id,
                    PersonRoles {
                        name: name.to_string(),
                        profile_path: profile_path.map(str::to_string),
                        roles: vec![(department.to_string(), role)],
                    },
                );
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&PersonRoles> {
        self.people.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &PersonRoles)> {
        self.order
            .iter()
            .filter_map(|id| self.people.get(id).map(|person| (*id, person)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

fn joined(parts: impl Iterator<Item = String>) -> Option<String> {
    let parts: Vec<String> = parts.filter(|p| !p.is_empty()).collect();
    Some(parts.join(" / ")).filter(|p| !p.is_empty())
}

/// Collects cast and crew of a production by person
///
/// Aggregate (all-season) credits are used when the catalog returned them,
/// otherwise the regular credits.
pub fn person_map(detail: &ProductionDetail) -> PersonMap {
    let mut map = PersonMap::default();

    if let Some(aggregate) = &detail.aggregate_credits {
        for cast in &aggregate.cast {
            let character = joined(cast.roles.iter().map(|r| r.character.clone()))
                .unwrap_or_else(|| DEFAULT_CAST_ROLE.to_string());
            map.credit(cast.id, &cast.name, cast.profile_path.as_deref(), ACTING, character);
        }
        for crew in &aggregate.crew {
            let department = non_empty(&crew.department).unwrap_or(DEFAULT_DEPARTMENT);
            let job = joined(crew.jobs.iter().map(|j| j.job.clone()))
                .unwrap_or_else(|| department.to_string());
            map.credit(crew.id, &crew.name, crew.profile_path.as_deref(), department, job);
        }
    } else if let Some(credits) = &detail.credits {
        for cast in &credits.cast {
            let character = cast
                .character
                .as_deref()
                .and_then(non_empty)
                .unwrap_or(DEFAULT_CAST_ROLE);
            map.credit(cast.id, &cast.name, cast.profile_path.as_deref(), ACTING, character.to_string());
        }
        for crew in &credits.crew {
            let department = non_empty(&crew.department).unwrap_or(DEFAULT_DEPARTMENT);
            let job = non_empty(&crew.job).unwrap_or(department);
            map.credit(crew.id, &crew.name, crew.profile_path.as_deref(), department, job.to_string());
        }
    }

    map
}

/// People credited on both productions, grouped by the highest-priority
/// department either credit names: Acting, Directing, Writing, Production,
/// then everything else. Order follows the first production's credits.
pub fn shared_people(a: &ProductionDetail, b: &ProductionDetail) -> SharedGroups {
    let map_a = person_map(a);
    let map_b = person_map(b);
    let mut groups = SharedGroups::default();

    for (id, in_a) in map_a.iter() {
        let Some(in_b) = map_b.get(id) else {
            continue;
        };

        let person = SharedPerson {
            id,
            name: in_a.name.clone(),
            profile_path: in_a.profile_path.clone().or_else(|| in_b.profile_path.clone()),
            role_in_a: in_a.joined_roles(),
            role_in_b: in_b.joined_roles(),
        };

        let in_either = |department: &str| in_a.has_department(department) || in_b.has_department(department);
        let group = if in_either(ACTING) {
            &mut groups.acting
        } else if in_either("Directing") {
            &mut groups.directing
        } else if in_either("Writing") {
            &mut groups.writing
        } else if in_either("Production") {
            &mut groups.production
        } else {
            &mut groups.other
        };
        group.push(person);
    }

    groups
}

/// Fetches two productions and lists the people they share
pub async fn compare(
    catalog: &dyn CatalogProvider,
    a: CreditKey,
    b: CreditKey,
) -> AppResult<Comparison> {
    let (detail_a, detail_b) = tokio::try_join!(catalog.fetch_production(a), catalog.fetch_production(b))?;

    let shared = shared_people(&detail_a, &detail_b);
    let total_shared = shared.total();

    tracing::info!(
        production_a = %a,
        production_b = %b,
        total_shared = total_shared,
        acting = shared.acting.len(),
        "Production comparison computed"
    );

    Ok(Comparison {
        production_a: ComparedProduction::from_detail(a, &detail_a),
        production_b: ComparedProduction::from_detail(b, &detail_b),
        shared,
        total_shared,
    })
}
