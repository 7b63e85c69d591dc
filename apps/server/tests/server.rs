use mhs::features::activities::Activities;
use mhs_server::Server;

#[test]
fn build_registers_the_activities_slice() {
    let server = Server::builder().port(0).build().expect("server should build");

    let activities =
        server.state().get_slice::<Activities>().expect("activities slice registered");
    assert_eq!(activities.list().len(), 12);
}

#[test]
fn builder_overrides_the_port() {
    let server = Server::builder().port(4583).build().expect("server should build");
    assert_eq!(server.state().config.server.port, 4583);
}
