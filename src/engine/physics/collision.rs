use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Solid level geometry (tiles)
    Terrain = 0b0000_0001,

    /// The player-controlled character
    Character = 0b0000_0010,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Terrain blocks the character but never itself
            CollisionGroups::Terrain => Group::from_bits_truncate(CollisionGroups::Character as u32),

            // The character only collides with terrain
            CollisionGroups::Character => Group::from_bits_truncate(CollisionGroups::Terrain as u32),
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Scene query filter seeing only what this group collides with
    pub fn query_filter(self) -> QueryFilter<'static> {
        QueryFilter::new().groups(self.to_interaction_groups())
    }
}
