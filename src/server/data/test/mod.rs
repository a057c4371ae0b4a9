mod affectation;
mod attestation;
mod candidature;
mod group;
mod leave;
mod offer;
