use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the bundled compiler unless the environment already provides one
    if env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()
            .map_err(|e| format!("no bundled protoc for this platform: {:?}", e))?;
        env::set_var("PROTOC", protoc);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/accounts/v1/accounts.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/accounts/v1/accounts.proto");

    Ok(())
}
