use crate::utils::Float;
use std::fmt;

/// Specifies a position of the stop inside the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopPosition {
    /// Origin of the route.
    Origin,
    /// Destination with given index in request order.
    Destination(usize),
    /// End of the route.
    End,
}

impl fmt::Display for StopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination(idx) => write!(f, "destination at {idx}"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Describes a malformed request.
#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    /// Stop has an empty (or whitespace only) id.
    EmptyId {
        /// Stop position.
        position: StopPosition,
    },
    /// Stop has non-finite or out of range coordinates.
    InvalidCoordinate {
        /// Stop position.
        position: StopPosition,
        /// Stop id.
        id: String,
        /// Latitude.
        lat: Float,
        /// Longitude.
        lng: Float,
    },
    /// The same id is used by more than one stop.
    DuplicateId {
        /// Duplicated id.
        id: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { position } => write!(f, "stop id is empty: {position}"),
            Self::InvalidCoordinate { position, id, lat, lng } => {
                write!(f, "invalid coordinates of '{id}' ({position}): lat={lat}, lng={lng}")
            }
            Self::DuplicateId { id } => write!(f, "duplicated stop id: '{id}'"),
        }
    }
}

impl std::error::Error for InputError {}

/// Specifies a resource limit which was exceeded while sequencing the route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceLimit {
    /// Request has too many destinations.
    MaxDestinations {
        /// Configured limit.
        limit: usize,
        /// Amount of destinations in the request.
        actual: usize,
    },
    /// Local search needs more passes than allowed.
    MaxPasses {
        /// Configured limit.
        limit: usize,
    },
    /// Computation quota (e.g. time) is reached.
    QuotaReached,
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDestinations { limit, actual } => {
                write!(f, "too many destinations: {actual}, max allowed is {limit}")
            }
            Self::MaxPasses { limit } => write!(f, "2-opt has not converged within {limit} pass(es)"),
            Self::QuotaReached => write!(f, "computation quota is reached"),
        }
    }
}

/// An error returned by route optimizer. No partial result is ever returned together with it.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteError {
    /// Request failed validation, all found violations are listed.
    Input(Vec<InputError>),
    /// A resource limit is exceeded.
    ResourceLimitExceeded(ResourceLimit),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(errors) => {
                let errors = errors.iter().map(|err| err.to_string()).collect::<Vec<_>>();
                write!(f, "invalid request: {}", errors.join(", "))
            }
            Self::ResourceLimitExceeded(limit) => write!(f, "resource limit exceeded: {limit}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<Vec<InputError>> for RouteError {
    fn from(errors: Vec<InputError>) -> Self {
        Self::Input(errors)
    }
}

impl From<ResourceLimit> for RouteError {
    fn from(limit: ResourceLimit) -> Self {
        Self::ResourceLimitExceeded(limit)
    }
}
