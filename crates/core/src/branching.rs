// SPDX-License-Identifier: MIT

//!
//! The organisational tree: campus cities, their faculties, and the
//! faculties' institutes
//!

use crate::Campus;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Institute {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faculty {
    pub id: &'static str,
    pub name: &'static str,
    pub institutes: &'static [Institute],
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct City {
    pub id: &'static str,
    pub campus: Campus,
    pub faculties: &'static [Faculty],
}

#[rustfmt::skip]
pub const CITIES: &[City] = &[
    City {
        id: "trd",
        campus: Campus::Trondheim,
        faculties: &[
            Faculty {
                id: "ie",
                name: "Fakultet for informasjonsteknologi og elektroteknikk",
                institutes: &[
                    Institute { id: "idi", name: "Institutt for datateknologi og informatikk" },
                    Institute { id: "iel", name: "Institutt for elkraftteknikk" },
                ],
            },
            Faculty {
                id: "økonomi",
                name: "Fakultet for økonomi",
                institutes: &[
                    Institute { id: "iot", name: "Institutt for industriell økonomi og teknologiledelse" },
                ],
            },
        ],
    },
    City {
        id: "gjv",
        campus: Campus::Gjovik,
        faculties: &[
            Faculty {
                id: "ad",
                name: "Fakultet for arkitektur og design",
                institutes: &[
                    Institute { id: "id-gjv", name: "Institutt for design (Gjøvik)" },
                ],
            },
        ],
    },
    City {
        id: "als",
        campus: Campus::Alesund,
        faculties: &[
            Faculty {
                id: "nv",
                name: "Fakultet for naturvitenskap",
                institutes: &[
                    Institute { id: "iba", name: "Institutt for biologiske fag Ålesund" },
                ],
            },
        ],
    },
];

/// The faculties that can be chosen given the selected campuses (every
/// faculty when none are selected)
pub fn available_faculties(campuses: &[Campus]) -> Vec<&'static Faculty> {
    CITIES
        .iter()
        .filter(|city| campuses.is_empty() || campuses.contains(&city.campus))
        .flat_map(|city| city.faculties.iter())
        .collect()
}

/// The institutes that can be chosen given the selected campuses and
/// faculties (faculty names)
pub fn available_institutes(campuses: &[Campus], faculties: &[String]) -> Vec<&'static Institute> {
    available_faculties(campuses)
        .into_iter()
        .filter(|faculty| faculties.is_empty() || faculties.iter().any(|name| name == faculty.name))
        .flat_map(|faculty| faculty.institutes.iter())
        .collect()
}
