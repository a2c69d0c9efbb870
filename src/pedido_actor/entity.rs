//! [`ActorEntity`] implementation for [`Pedido`].
//!
//! Every hook follows the same shape: retain whatever the pedido will newly point at, change
//! the draft, append the audit record. If any step fails, the new retains are released and
//! the draft is dropped; if all succeed, whatever the pedido stopped pointing at is released.

use super::holds::Holds;
use super::{PedidoAction, PedidoContext};
use crate::error::FleetError;
use crate::model::{
    ConductorId, Edit, Editor, EstadoPedido, Pedido, PedidoCreate, PedidoId, PedidoPatch,
    Reference, TipoOperacion, VehiculoId,
};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

impl Pedido {
    async fn build(
        id: PedidoId,
        data: PedidoCreate,
        editor: &Editor,
        acquired: &mut Holds,
        ctx: &PedidoContext,
    ) -> Result<Pedido, FleetError> {
        acquired.retain_cliente(data.cliente_id, ctx).await?;
        if let Some(conductor) = data.conductor_id {
            acquired.retain_conductor(conductor, ctx).await?;
        }
        if let Some(vehiculo) = data.vehiculo_id {
            acquired.retain_vehiculo(vehiculo, ctx).await?;
        }

        let pedido = Pedido {
            id,
            cliente: data.cliente_id,
            direccion_origen: data.direccion_origen,
            direccion_destino: data.direccion_destino,
            fecha_creacion: data.fecha_creacion.unwrap_or_else(Utc::now),
            fecha_recogida_estimada: data.fecha_recogida_estimada,
            fecha_recogida_real: data.fecha_recogida_real,
            fecha_entrega_estimada: data.fecha_entrega_estimada,
            fecha_entrega_real: data.fecha_entrega_real,
            estado: data.estado.unwrap_or_default(),
            vehiculo: data.vehiculo_id,
            conductor: data.conductor_id,
            peso_kg: data.peso_kg,
            notas: data.notas,
        };
        ctx.audit.record(&pedido, TipoOperacion::Crear, editor).await?;
        Ok(pedido)
    }

    async fn repoint_conductor(
        &mut self,
        reference: Reference<ConductorId>,
        acquired: &mut Holds,
        released: &mut Holds,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        match reference.id {
            Some(id) if self.conductor == Some(id) => {}
            Some(id) => {
                acquired.retain_conductor(id, ctx).await?;
                released.conductor(self.conductor.replace(id));
            }
            None => released.conductor(self.conductor.take()),
        }
        Ok(())
    }

    async fn repoint_vehiculo(
        &mut self,
        reference: Reference<VehiculoId>,
        acquired: &mut Holds,
        released: &mut Holds,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        match reference.id {
            Some(id) if self.vehiculo == Some(id) => {}
            Some(id) => {
                acquired.retain_vehiculo(id, ctx).await?;
                released.vehiculo(self.vehiculo.replace(id));
            }
            None => released.vehiculo(self.vehiculo.take()),
        }
        Ok(())
    }

    async fn apply_patch(
        &mut self,
        patch: PedidoPatch,
        editor: &Editor,
        acquired: &mut Holds,
        ctx: &PedidoContext,
    ) -> Result<Holds, FleetError> {
        let mut released = Holds::default();

        if let Some(cliente) = patch.cliente_id {
            if cliente != self.cliente {
                acquired.retain_cliente(cliente, ctx).await?;
                released.cliente(self.cliente);
                self.cliente = cliente;
            }
        }
        if let Some(reference) = patch.conductor {
            self.repoint_conductor(reference, acquired, &mut released, ctx)
                .await?;
        }
        if let Some(reference) = patch.vehiculo {
            self.repoint_vehiculo(reference, acquired, &mut released, ctx)
                .await?;
        }

        if let Some(origen) = patch.direccion_origen {
            self.direccion_origen = origen;
        }
        if let Some(destino) = patch.direccion_destino {
            self.direccion_destino = destino;
        }
        if let Some(fecha) = patch.fecha_recogida_estimada {
            self.fecha_recogida_estimada = Some(fecha);
        }
        if let Some(fecha) = patch.fecha_recogida_real {
            self.fecha_recogida_real = Some(fecha);
        }
        if let Some(fecha) = patch.fecha_entrega_estimada {
            self.fecha_entrega_estimada = Some(fecha);
        }
        if let Some(fecha) = patch.fecha_entrega_real {
            self.fecha_entrega_real = Some(fecha);
        }
        if let Some(peso) = patch.peso_kg {
            self.peso_kg = Some(peso);
        }
        if let Some(notas) = patch.notas {
            self.notas = Some(notas);
        }

        ctx.audit
            .record(&*self, TipoOperacion::Actualizar, editor)
            .await?;
        Ok(released)
    }

    async fn assign(
        &mut self,
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: &Editor,
        acquired: &mut Holds,
        ctx: &PedidoContext,
    ) -> Result<Holds, FleetError> {
        // Rules are checked and both sides retained by the conductor and vehiculo actors.
        ctx.conductores.pair_for_order(conductor_id, vehiculo_id).await?;
        acquired.conductor(Some(conductor_id));
        acquired.vehiculo(Some(vehiculo_id));

        let mut released = Holds::default();
        released.conductor(self.conductor.replace(conductor_id));
        released.vehiculo(self.vehiculo.replace(vehiculo_id));
        if self.estado == EstadoPedido::Pendiente {
            self.estado = EstadoPedido::Asignado;
        }

        ctx.audit
            .record(&*self, TipoOperacion::Actualizar, editor)
            .await?;
        Ok(released)
    }
}

#[async_trait]
impl ActorEntity for Pedido {
    type Id = PedidoId;
    type Create = Edit<PedidoCreate>;
    type Update = Edit<PedidoPatch>;
    type Delete = Editor;
    type Action = PedidoAction;
    type ActionResult = Pedido;
    type Context = PedidoContext;
    type Error = FleetError;

    async fn on_create(
        id: PedidoId,
        params: Edit<PedidoCreate>,
        _peers: &Peers<'_, Self>,
        ctx: &PedidoContext,
    ) -> Result<Self, FleetError> {
        let Edit { editor, data } = params;
        let mut acquired = Holds::default();
        match Pedido::build(id, data, &editor, &mut acquired, ctx).await {
            Ok(pedido) => Ok(pedido),
            Err(e) => {
                acquired.release(ctx).await;
                Err(e)
            }
        }
    }

    async fn on_update(
        &mut self,
        update: Edit<PedidoPatch>,
        _peers: &Peers<'_, Self>,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        let Edit { editor, data } = update;
        let mut acquired = Holds::default();
        let outcome = self.apply_patch(data, &editor, &mut acquired, ctx).await;
        acquired.settle(outcome, ctx).await
    }

    /// Nothing references a pedido, so a delete is never refused for integrity reasons.
    async fn on_delete(&self, editor: Editor, ctx: &PedidoContext) -> Result<(), FleetError> {
        ctx.audit
            .record(self, TipoOperacion::Eliminar, &editor)
            .await?;

        let mut released = Holds::default();
        released.cliente(self.cliente);
        released.conductor(self.conductor);
        released.vehiculo(self.vehiculo);
        released.release(ctx).await;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PedidoAction,
        _peers: &Peers<'_, Self>,
        ctx: &PedidoContext,
    ) -> Result<Pedido, FleetError> {
        match action {
            PedidoAction::AssignDriverAndVehicle {
                conductor_id,
                vehiculo_id,
                editor,
            } => {
                let mut acquired = Holds::default();
                let outcome = self
                    .assign(conductor_id, vehiculo_id, &editor, &mut acquired, ctx)
                    .await;
                acquired.settle(outcome, ctx).await?;
                info!(pedido_id = %self.id, %conductor_id, %vehiculo_id, estado = %self.estado, "Assigned");
            }
            PedidoAction::ChangeState { estado, editor } => {
                if !self.estado.can_transition_to(estado) {
                    return Err(FleetError::ValidationConflict(
                        "completed orders may only be cancelled".into(),
                    ));
                }
                self.estado = estado;
                ctx.audit
                    .record(&*self, TipoOperacion::Actualizar, &editor)
                    .await?;
            }
        }
        Ok(self.clone())
    }
}
