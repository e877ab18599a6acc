//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct AgentRes(domain::SteeringAgent);

impl Deref for AgentRes {
    type Target = domain::SteeringAgent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AgentRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::SteeringAgent> for AgentRes {
    fn from(value: domain::SteeringAgent) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct ArmRes(domain::TwoBoneArm);

impl Deref for ArmRes {
    type Target = domain::TwoBoneArm;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ArmRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::TwoBoneArm> for ArmRes {
    fn from(value: domain::TwoBoneArm) -> Self {
        Self(value)
    }
}

/// The food the agent chases. Plain demo state rather than a domain entity;
/// the domain only ever sees its position as a seek target.
#[derive(Resource)]
pub struct FoodRes {
    pub position: domain::Vector2,
}
