mod cuboid_penetration;
mod curved_penetration;
mod degenerate_colliders;
