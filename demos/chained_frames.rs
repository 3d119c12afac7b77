use homtran::{HomogeneousTransform, InvalidArgument, RelativeTo};
use nalgebra::{Matrix4, UnitQuaternion, Vector3};
use std::f64::consts::FRAC_PI_2;

fn main() -> Result<(), InvalidArgument> {
    // a mobile robot stands at (4, 1, 0) in the world, facing along the world's y axis
    let robot = HomogeneousTransform::new(
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        Vector3::new(4., 1., 0.),
    );

    // its arm is mounted 0.5m up and 0.2m forward, measured along the robot's own axes,
    // and tilted down a little
    let arm = HomogeneousTransform::relative_to(
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.3),
        Vector3::new(0.2, 0., 0.5),
        RelativeTo::Local(&robot),
    );

    // a calibration tool handed us the camera pose on the arm as a 4x4 matrix
    #[rustfmt::skip]
    let camera_on_arm = HomogeneousTransform::<UnitQuaternion<f64>>::from_matrix(&Matrix4::new(
        1., 0., 0., 0.05,
        0., 1., 0., 0.,
        0., 0., 1., 0.1,
        0., 0., 0., 1.,
    ))?;

    // chaining gives us the camera pose in the world directly
    let camera = arm * camera_on_arm;
    println!("camera in world: {camera}");

    // something the camera sees 2m ahead of it
    let seen_by_camera = Vector3::new(2., 0., 0.);
    let seen_in_world = camera.transform(&seen_by_camera);
    println!("seen in world: {seen_in_world:?}");

    // the robot wants to drive there, so it needs the target in its own frame
    let seen_by_robot = robot.inverse_transform(&seen_in_world);
    println!("seen by robot: {seen_by_robot:?}");

    // anything downstream that speaks matrices can have one
    println!("camera matrix: {}", camera.to_matrix());

    // and a matrix that isn't a rigid transform is refused
    let mut stretched = Matrix4::identity();
    stretched[(0, 0)] = 2.;
    match HomogeneousTransform::<UnitQuaternion<f64>>::from_matrix(&stretched) {
        Ok(_) => unreachable!("scaling is not a rigid transform"),
        Err(e) => println!("refused: {e}"),
    }

    Ok(())
}
