//! Edge and node records for the company / field / role graph.

use std::fmt;
use std::str::FromStr;

/// Category pair of an edge, as written in the `link_type` column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkType {
	/// `Company-Field`: a company operating in a field.
	CompanyField,
	/// `Field-Role`: a field employing a role.
	FieldRole,
	/// `Role-Company`: a role found at a company.
	RoleCompany,
	/// Any other string. Carries no group rule.
	Unrecognized(String),
}

impl LinkType {
	/// Groups implied for the `(source, target)` endpoints, if this link type has a rule.
	pub fn endpoint_groups(&self) -> Option<(NodeGroup, NodeGroup)> {
		match self {
			Self::CompanyField => Some((NodeGroup::Company, NodeGroup::Field)),
			Self::FieldRole => Some((NodeGroup::Field, NodeGroup::Role)),
			Self::RoleCompany => Some((NodeGroup::Role, NodeGroup::Company)),
			Self::Unrecognized(_) => None,
		}
	}
}

impl FromStr for LinkType {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"Company-Field" => Self::CompanyField,
			"Field-Role" => Self::FieldRole,
			"Role-Company" => Self::RoleCompany,
			other => Self::Unrecognized(other.to_string()),
		})
	}
}

impl fmt::Display for LinkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CompanyField => f.write_str("Company-Field"),
			Self::FieldRole => f.write_str("Field-Role"),
			Self::RoleCompany => f.write_str("Role-Company"),
			Self::Unrecognized(s) => f.write_str(s),
		}
	}
}

/// A directed relation between two node ids. Loaded verbatim from input.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Category pair, decides the endpoints' groups.
	pub link_type: LinkType,
	/// Relationship strength. `None` when the cell is empty or not a number.
	pub value: Option<f64>,
}

/// Inferred category of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeGroup {
	/// Source of `Company-Field`, target of `Role-Company`.
	Company,
	/// Target of `Company-Field`, source of `Field-Role`.
	Field,
	/// Target of `Field-Role`, source of `Role-Company`.
	Role,
	/// No link type rule applied.
	#[default]
	Unknown,
}

impl NodeGroup {
	/// Visual radius in graph units.
	pub fn radius(self) -> f64 {
		match self {
			Self::Company => 15.0,
			Self::Field => 10.0,
			Self::Role => 7.0,
			Self::Unknown => 5.0,
		}
	}

	/// CSS fill color.
	pub fn color(self) -> &'static str {
		match self {
			Self::Company => "steelblue",
			Self::Field => "lightcoral",
			Self::Role => "mediumseagreen",
			Self::Unknown => "gray",
		}
	}
}

impl fmt::Display for NodeGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Company => "company",
			Self::Field => "field",
			Self::Role => "role",
			Self::Unknown => "unknown",
		})
	}
}

/// A graph vertex. Positions are owned by the simulation, not stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Identifier as it appears in the edge list.
	pub id: String,
	/// Final inferred group.
	pub group: NodeGroup,
	/// Visual radius, a function of `group`.
	pub radius: f64,
}

/// Derived nodes plus the edges they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Distinct endpoints, in order of first appearance.
	pub nodes: Vec<Node>,
	/// Edges as loaded.
	pub edges: Vec<Edge>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_link_types() {
		assert_eq!("Company-Field".parse(), Ok(LinkType::CompanyField));
		assert_eq!("Field-Role".parse(), Ok(LinkType::FieldRole));
		assert_eq!("Role-Company".parse(), Ok(LinkType::RoleCompany));
	}

	#[test]
	fn link_type_match_is_exact() {
		assert_eq!(
			"company-field".parse::<LinkType>(),
			Ok(LinkType::Unrecognized("company-field".into()))
		);
		assert_eq!(LinkType::Unrecognized(String::new()).endpoint_groups(), None);
	}

	#[test]
	fn radius_by_group() {
		assert_eq!(NodeGroup::Company.radius(), 15.0);
		assert_eq!(NodeGroup::Field.radius(), 10.0);
		assert_eq!(NodeGroup::Role.radius(), 7.0);
		assert_eq!(NodeGroup::Unknown.radius(), 5.0);
	}
}
