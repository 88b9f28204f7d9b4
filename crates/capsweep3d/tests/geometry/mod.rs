mod capsule_trimesh_contact;
mod segment_closest_points;
mod trimesh_build;
