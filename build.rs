fn main() {
    #[cfg(feature = "codegen")]
    {
        tonic_build::configure()
            .build_server(false)
            .build_client(true)
            .out_dir("src/persistence/proto")
            .emit_rerun_if_changed(false)
            .compile_protos(&["proto/library.proto"], &["proto"])
            .unwrap();
    }
}
