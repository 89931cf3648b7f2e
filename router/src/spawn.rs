use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

/// Spawns router tasks on the browser's microtask queue through
/// `wasm-bindgen-futures`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmBindgenSpawner;

impl LocalSpawn for WasmBindgenSpawner {
    fn spawn_local_obj(
        &self,
        future: LocalFutureObj<'static, ()>,
    ) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
