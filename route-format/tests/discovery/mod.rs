//! Contains tests which explore optimizer behavior on generated problems.
